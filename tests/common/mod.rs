use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    /// Fresh temp directory holding a healthy SeatWise tree.
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("app");
        make_fixture_project(&root);
        Self { _tmp: tmp, root }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("swdoctor").expect("binary built");
        cmd.args(["--root", self.root.to_str().unwrap()]);
        cmd
    }

    /// Run `check --json` and parse stdout, without asserting on the exit
    /// code; broken-tree runs exit 1 but still print a full report.
    pub fn check_json(&self) -> Value {
        let out = self.cmd().arg("--json").arg("check").output().expect("run swdoctor");
        serde_json::from_slice(&out.stdout).expect("valid json output")
    }

    pub fn remove(&self, rel: &str) {
        fs::remove_file(self.root.join(rel)).expect("remove fixture file");
    }

    pub fn write(&self, rel: &str, content: &str) {
        fs::write(self.root.join(rel), content).expect("rewrite fixture file");
    }
}

pub fn make_fixture_project(root: &Path) {
    fs::create_dir_all(root.join("backend/models")).unwrap();
    fs::create_dir_all(root.join("backend/config")).unwrap();
    fs::create_dir_all(root.join("backend/controllers")).unwrap();
    fs::create_dir_all(root.join("src/services")).unwrap();

    fs::write(
        root.join("backend/server.js"),
        "const express = require(\"express\");\nconst app = express();\napp.listen(process.env.PORT || 5000);\n",
    )
    .unwrap();
    fs::write(
        root.join("backend/package.json"),
        serde_json::to_string_pretty(&json!({
            "name": "seatwise-backend",
            "dependencies": {
                "express": "^4.18.2",
                "mongoose": "^7.5.0",
                "cors": "^2.8.5",
                "dotenv": "^16.3.1",
                "bcryptjs": "^2.4.3",
                "jsonwebtoken": "^9.0.2"
            }
        }))
        .unwrap(),
    )
    .unwrap();
    fs::write(
        root.join("backend/.env"),
        "MONGO_URI=mongodb://localhost:27017/seatwise\nJWT_SECRET=fixture-secret\nPORT=5000\n",
    )
    .unwrap();

    for model in ["Student.js", "Exam.js", "SeatAllocation.js"] {
        fs::write(
            root.join("backend/models").join(model),
            "const mongoose = require(\"mongoose\");\nconst schema = new mongoose.Schema({});\nmodule.exports = mongoose.model(\"M\", schema);\n",
        )
        .unwrap();
    }

    fs::write(
        root.join("backend/config/db.js"),
        "module.exports = async () => {};\n",
    )
    .unwrap();
    fs::write(
        root.join("backend/controllers/authController.js"),
        "module.exports.login = async (req, res) => {};\n",
    )
    .unwrap();

    fs::write(
        root.join("package.json"),
        serde_json::to_string_pretty(&json!({
            "name": "seatwise",
            "dependencies": { "react": "^18.2.0", "axios": "^1.5.0" }
        }))
        .unwrap(),
    )
    .unwrap();
    fs::write(root.join("src/App.tsx"), "export default function App() {}\n").unwrap();
    fs::write(
        root.join("src/services/api.ts"),
        "const api = axios.create({ baseURL: \"http://localhost:5000/api\" });\napi.interceptors.request.use((c) => c);\nexport default api;\n",
    )
    .unwrap();
}
