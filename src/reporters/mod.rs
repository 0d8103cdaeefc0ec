//! Output reporters for analysis results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::error::{Result, VerilensError};
use crate::models::AnalysisReport;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = VerilensError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(VerilensError::UnknownFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render a report in the given format
pub fn render(report: &AnalysisReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(report)),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => Ok(markdown::render(report)),
    }
}

/// Render several reports as one JSON array
pub fn render_json_batch(reports: &[AnalysisReport]) -> Result<String> {
    json::render_batch(reports)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::explain::Signal;
    use crate::models::*;

    /// A fully populated report for testing
    pub(crate) fn test_report() -> AnalysisReport {
        AnalysisReport {
            mode: DecisionMode::Informational,
            risk_score: RiskScore::clamped(72),
            risk_band: RiskBand::High,
            tone: Tone::Emotional,
            claims: vec![Claim {
                claim: "Miracle cure exposed by insiders".into(),
                risk: RiskScore::clamped(80),
                tone: Tone::Emotional,
            }],
            virality: Virality::High,
            reasons: vec![Signal::SensationalLanguage, Signal::LimitedContext],
            confidence: ConfidenceBand {
                level: ConfidenceLevel::Medium,
                margin: "±12%",
            },
            actions: vec!["Avoid sharing until verified", "Consult trusted news sources"],
            verification: VerificationTriage {
                flagged_claims: vec!["Miracle cure exposed by insiders".into()],
                sources: vec!["Peer-reviewed academic journals"],
                status: "no supporting institutional references detected",
            },
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Markdown);
        assert!(matches!(
            OutputFormat::from_str("sarif"),
            Err(VerilensError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_every_format_renders() {
        let report = test_report();
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
            assert!(!render(&report, format).unwrap().is_empty());
        }
    }
}
