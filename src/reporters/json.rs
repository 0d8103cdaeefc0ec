//! JSON reporter
//!
//! Outputs the response object as pretty-printed JSON.

use crate::error::Result;
use crate::models::AnalysisReport;

/// Render report as JSON
pub fn render(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render several reports as a JSON array
pub fn render_batch(reports: &[AnalysisReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
