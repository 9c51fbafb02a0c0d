pub mod checks;
pub mod output;
pub mod report;
