use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// The slice of an npm `package.json` the dependency check cares about.
#[derive(Debug, Deserialize, Default)]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: HashMap<String, serde_json::Value>,
}

/// Outcome of one individual check. `Skipped` marks a check whose input file
/// is absent: the files section already reports the absence, so the check
/// itself is not applicable and counts toward neither errors nor warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckItem {
    pub fn pass(name: impl Into<String>) -> Self {
        CheckItem {
            name: name.into(),
            status: CheckStatus::Pass,
            detail: None,
        }
    }

    pub fn warn(name: impl Into<String>, detail: impl Into<String>) -> Self {
        CheckItem {
            name: name.into(),
            status: CheckStatus::Warn,
            detail: Some(detail.into()),
        }
    }

    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        CheckItem {
            name: name.into(),
            status: CheckStatus::Fail,
            detail: Some(detail.into()),
        }
    }

    pub fn skipped(name: impl Into<String>) -> Self {
        CheckItem {
            name: name.into(),
            status: CheckStatus::Skipped,
            detail: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SectionReport {
    pub id: String,
    pub title: String,
    pub checks: Vec<CheckItem>,
}

#[derive(Debug, Serialize)]
pub struct DoctorReport {
    pub overall: String,
    pub errors: usize,
    pub warnings: usize,
    pub sections: Vec<SectionReport>,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
}
