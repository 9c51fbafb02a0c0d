use crate::domain::expected;
use crate::domain::models::{CheckItem, DoctorReport, PackageManifest, SectionReport};
use crate::services::report;
use std::fs;
use std::path::Path;

/// A named group of checks. Adding a section is a data change here, not new
/// control flow in the runner.
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub run: fn(&Path) -> Vec<CheckItem>,
}

pub fn registry() -> Vec<Section> {
    vec![
        Section {
            id: "files",
            title: "file structure",
            run: check_required_files,
        },
        Section {
            id: "env",
            title: "backend configuration",
            run: check_env_keys,
        },
        Section {
            id: "dependencies",
            title: "backend dependencies",
            run: check_dependencies,
        },
        Section {
            id: "models",
            title: "database models",
            run: check_models,
        },
        Section {
            id: "client",
            title: "client API configuration",
            run: check_client_api,
        },
    ]
}

/// Run every section in registry order. A section never aborts the run; any
/// problem it finds comes back as a Fail or Warn item.
pub fn run_all(root: &Path) -> DoctorReport {
    let sections = registry()
        .into_iter()
        .map(|s| SectionReport {
            id: s.id.to_string(),
            title: s.title.to_string(),
            checks: (s.run)(root),
        })
        .collect();
    report::build(sections)
}

/// What we found at a path the check wanted to read. Absence is not an error
/// at this layer; the files section reports missing required files.
enum SourceFile {
    Present(String),
    Absent,
    Unreadable(String),
}

fn load_text(path: &Path) -> SourceFile {
    if !path.exists() {
        return SourceFile::Absent;
    }
    match fs::read_to_string(path) {
        Ok(text) => SourceFile::Present(text),
        Err(err) => SourceFile::Unreadable(err.to_string()),
    }
}

fn check_required_files(root: &Path) -> Vec<CheckItem> {
    expected::REQUIRED_FILES
        .iter()
        .map(|file| {
            if root.join(file).exists() {
                CheckItem::pass(*file)
            } else {
                CheckItem::fail(*file, "missing")
            }
        })
        .collect()
}

fn check_env_keys(root: &Path) -> Vec<CheckItem> {
    let env = match load_text(&root.join(expected::ENV_FILE)) {
        SourceFile::Present(text) => text,
        SourceFile::Absent => {
            return expected::ENV_KEYS
                .iter()
                .map(|(key, _)| CheckItem::skipped(*key))
                .collect();
        }
        SourceFile::Unreadable(err) => {
            return vec![CheckItem::fail(
                expected::ENV_FILE,
                format!("could not read: {err}"),
            )];
        }
    };

    expected::ENV_KEYS
        .iter()
        .map(|(key, missing_detail)| {
            if env.contains(key) {
                CheckItem::pass(*key)
            } else {
                CheckItem::warn(*key, *missing_detail)
            }
        })
        .collect()
}

fn check_dependencies(root: &Path) -> Vec<CheckItem> {
    let raw = match load_text(&root.join(expected::MANIFEST_FILE)) {
        SourceFile::Present(text) => text,
        SourceFile::Absent => {
            return expected::REQUIRED_DEPS
                .iter()
                .map(|dep| CheckItem::skipped(*dep))
                .collect();
        }
        SourceFile::Unreadable(err) => {
            return vec![CheckItem::fail(
                expected::MANIFEST_FILE,
                format!("could not read: {err}"),
            )];
        }
    };

    let manifest: PackageManifest = match serde_json::from_str(&raw) {
        Ok(m) => m,
        Err(err) => {
            return vec![CheckItem::fail(
                expected::MANIFEST_FILE,
                format!("could not parse: {err}"),
            )];
        }
    };

    expected::REQUIRED_DEPS
        .iter()
        .map(|dep| {
            if manifest.dependencies.contains_key(*dep) {
                CheckItem::pass(*dep)
            } else {
                CheckItem::fail(*dep, "missing from dependencies")
            }
        })
        .collect()
}

fn check_models(root: &Path) -> Vec<CheckItem> {
    let models_dir = root.join(expected::MODELS_DIR);
    expected::MODEL_FILES
        .iter()
        .map(|model| {
            match load_text(&models_dir.join(model)) {
                SourceFile::Present(text) => {
                    let mut missing = Vec::new();
                    if !text.contains(expected::MODEL_SCHEMA_MARKER) {
                        missing.push(expected::MODEL_SCHEMA_MARKER);
                    }
                    if !text.contains(expected::MODEL_EXPORTS_MARKER) {
                        missing.push(expected::MODEL_EXPORTS_MARKER);
                    }
                    if missing.is_empty() {
                        CheckItem::pass(*model)
                    } else {
                        CheckItem::fail(*model, format!("missing {}", missing.join(" and ")))
                    }
                }
                SourceFile::Absent => CheckItem::skipped(*model),
                SourceFile::Unreadable(err) => {
                    CheckItem::fail(*model, format!("could not read: {err}"))
                }
            }
        })
        .collect()
}

fn check_client_api(root: &Path) -> Vec<CheckItem> {
    let api = match load_text(&root.join(expected::CLIENT_API_FILE)) {
        SourceFile::Present(text) => text,
        SourceFile::Absent => {
            return vec![
                CheckItem::skipped(expected::CLIENT_BASE_URL_MARKER),
                CheckItem::skipped(expected::CLIENT_INTERCEPTORS_MARKER),
            ];
        }
        SourceFile::Unreadable(err) => {
            return vec![CheckItem::fail(
                expected::CLIENT_API_FILE,
                format!("could not read: {err}"),
            )];
        }
    };

    let mut items = Vec::new();
    if api.contains(expected::CLIENT_BASE_URL_MARKER) {
        items.push(CheckItem::pass(expected::CLIENT_BASE_URL_MARKER));
    } else {
        items.push(CheckItem::warn(
            expected::CLIENT_BASE_URL_MARKER,
            "API baseURL not configured",
        ));
    }
    if api.contains(expected::CLIENT_INTERCEPTORS_MARKER) {
        items.push(CheckItem::pass(expected::CLIENT_INTERCEPTORS_MARKER));
    } else {
        items.push(CheckItem::warn(
            expected::CLIENT_INTERCEPTORS_MARKER,
            "request interceptors not configured",
        ));
    }
    items
}
