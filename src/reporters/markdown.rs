//! Markdown reporter

use crate::models::AnalysisReport;
use crate::DISCLAIMER;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &AnalysisReport) -> String {
    let mut md = String::new();

    md.push_str("# VeriLens Analysis\n\n");
    md.push_str("| Metric | Value |\n|--------|-------|\n");
    md.push_str(&format!(
        "| Risk score | **{}/100** ({}) |\n",
        report.risk_score, report.risk_band
    ));
    md.push_str(&format!("| Context | {} |\n", report.mode.label()));
    md.push_str(&format!(
        "| Confidence | {} ({}) |\n",
        report.confidence.level, report.confidence.margin
    ));
    md.push_str(&format!("| Virality | {} |\n", report.virality));
    md.push_str(&format!("| Tone | {} |\n\n", report.tone));

    md.push_str("## Signals\n\n");
    if report.reasons.is_empty() {
        md.push_str("No significant linguistic risk signals detected.\n");
    }
    for reason in &report.reasons {
        md.push_str(&format!("- {reason}\n"));
    }

    if !report.claims.is_empty() {
        md.push_str("\n## Claims\n\n| Risk | Tone | Claim |\n|------|------|-------|\n");
        for claim in &report.claims {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                claim.risk,
                claim.tone,
                claim.claim.replace('|', "\\|")
            ));
        }
    }

    md.push_str("\n## Recommended Action\n\n");
    for action in &report.actions {
        md.push_str(&format!("- {action}\n"));
    }

    md.push_str("\n## Verification\n\n");
    for claim in &report.verification.flagged_claims {
        md.push_str(&format!("- ⚠ {claim}\n"));
    }
    md.push_str("\nSuggested sources:\n\n");
    for source in &report.verification.sources {
        md.push_str(&format!("- {source}\n"));
    }
    md.push_str(&format!("\n_Status: {}_\n", report.verification.status));

    md.push_str(&format!("\n---\n\n<sub>{DISCLAIMER}</sub>\n"));
    md
}
