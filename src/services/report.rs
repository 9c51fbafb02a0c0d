use crate::domain::expected;
use crate::domain::models::{CheckStatus, DoctorReport, SectionReport};

/// Fold section results into the final report. Errors beat warnings when
/// picking the overall verdict.
pub fn build(sections: Vec<SectionReport>) -> DoctorReport {
    let mut errors = 0usize;
    let mut warnings = 0usize;
    for section in &sections {
        for check in &section.checks {
            match check.status {
                CheckStatus::Fail => errors += 1,
                CheckStatus::Warn => warnings += 1,
                CheckStatus::Pass | CheckStatus::Skipped => {}
            }
        }
    }

    let overall = if errors > 0 {
        "needs_attention"
    } else if warnings > 0 {
        "warnings"
    } else {
        "ok"
    }
    .to_string();

    let recommendations = recommendations_for(&sections);

    DoctorReport {
        overall,
        errors,
        warnings,
        sections,
        recommendations,
        next_steps: expected::NEXT_STEPS.iter().map(|s| s.to_string()).collect(),
    }
}

fn section_has(sections: &[SectionReport], id: &str, status: CheckStatus) -> bool {
    sections
        .iter()
        .filter(|s| s.id == id)
        .any(|s| s.checks.iter().any(|c| c.status == status))
}

fn recommendations_for(sections: &[SectionReport]) -> Vec<String> {
    let mut recs = Vec::new();
    if section_has(sections, "files", CheckStatus::Fail) {
        recs.push("Restore the missing project files listed above before starting the app.".to_string());
    }
    if section_has(sections, "env", CheckStatus::Warn) {
        recs.push(
            "Add the missing keys (MONGO_URI, JWT_SECRET, PORT) to backend/.env.".to_string(),
        );
    }
    if section_has(sections, "dependencies", CheckStatus::Fail) {
        recs.push("Run `npm install` inside backend/ to restore the missing dependencies.".to_string());
    }
    if section_has(sections, "models", CheckStatus::Fail) {
        recs.push(
            "Every model must declare a mongoose.Schema and export it via module.exports."
                .to_string(),
        );
    }
    if section_has(sections, "client", CheckStatus::Warn) {
        recs.push(
            "Point src/services/api.ts at the backend baseURL and register its interceptors."
                .to_string(),
        );
    }
    recs
}
