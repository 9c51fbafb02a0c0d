//! What a healthy SeatWise tree looks like. These tables are the whole
//! configuration surface; there is deliberately no config file.

/// Files that must exist relative to the project root.
pub const REQUIRED_FILES: [&str; 11] = [
    "backend/server.js",
    "backend/package.json",
    "backend/.env",
    "backend/models/Student.js",
    "backend/models/Exam.js",
    "backend/models/SeatAllocation.js",
    "backend/config/db.js",
    "backend/controllers/authController.js",
    "package.json",
    "src/App.tsx",
    "src/services/api.ts",
];

pub const ENV_FILE: &str = "backend/.env";

/// Key name plus the warning detail printed when it is missing. Presence is a
/// substring match on the raw file, not key=value parsing.
pub const ENV_KEYS: [(&str, &str); 3] = [
    ("MONGO_URI", "not set in .env"),
    ("JWT_SECRET", "not set in .env"),
    ("PORT", "not set, backend will default to 5000"),
];

pub const MANIFEST_FILE: &str = "backend/package.json";

pub const REQUIRED_DEPS: [&str; 6] = [
    "express",
    "mongoose",
    "cors",
    "dotenv",
    "bcryptjs",
    "jsonwebtoken",
];

pub const MODELS_DIR: &str = "backend/models";

pub const MODEL_FILES: [&str; 3] = ["Student.js", "Exam.js", "SeatAllocation.js"];

pub const MODEL_SCHEMA_MARKER: &str = "mongoose.Schema";
pub const MODEL_EXPORTS_MARKER: &str = "module.exports";

pub const CLIENT_API_FILE: &str = "src/services/api.ts";

pub const CLIENT_BASE_URL_MARKER: &str = "baseURL";
pub const CLIENT_INTERCEPTORS_MARKER: &str = "interceptors";

/// Generic checklist printed at the end of every run, whatever the results.
pub const NEXT_STEPS: [&str; 5] = [
    "Ensure both backend and frontend servers are running",
    "MongoDB server must be running",
    "Check browser console for frontend errors",
    "Check terminal output for backend errors",
    "Verify API endpoints with curl or Postman",
];
