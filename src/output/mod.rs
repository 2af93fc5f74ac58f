//! Run output: progress display and reports.

pub mod progress;
mod report;

pub use report::{ReportRow, ReportSettings, ReportSummary, RunReport, write_report};
