use crate::domain::models::{CheckStatus, DoctorReport, JsonOut};
use crate::services::checks::Section;
use serde::Serialize;

pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

pub fn print_report(json: bool, report: &DoctorReport) -> anyhow::Result<()> {
    if json {
        return print_json(report);
    }

    for section in &report.sections {
        println!("checking {}", section.title);
        for check in &section.checks {
            let tag = match check.status {
                CheckStatus::Pass => "ok  ",
                CheckStatus::Warn => "warn",
                CheckStatus::Fail => "FAIL",
                CheckStatus::Skipped => "skip",
            };
            match &check.detail {
                Some(detail) => println!("  {}  {} ({})", tag, check.name, detail),
                None => println!("  {}  {}", tag, check.name),
            }
        }
        println!();
    }

    println!("errors: {}", report.errors);
    println!("warnings: {}", report.warnings);
    match report.overall.as_str() {
        "ok" => println!("all checks passed, no errors detected"),
        "warnings" => println!("no errors, but some warnings remain"),
        _ => println!("errors detected, review the output above"),
    }

    if !report.recommendations.is_empty() {
        println!();
        println!("suggestions:");
        for rec in &report.recommendations {
            println!("  - {rec}");
        }
    }

    println!();
    println!("next steps:");
    for (i, step) in report.next_steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    Ok(())
}

pub fn print_sections(json: bool, sections: &[Section]) -> anyhow::Result<()> {
    if json {
        let rows: Vec<serde_json::Value> = sections
            .iter()
            .map(|s| serde_json::json!({"id": s.id, "title": s.title}))
            .collect();
        return print_json(rows);
    }
    for s in sections {
        println!("{}\t{}", s.id, s.title);
    }
    Ok(())
}
