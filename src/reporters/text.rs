//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisReport, ConfidenceLevel, RiskBand, Virality};
use crate::DISCLAIMER;
use console::{style, StyledObject};

fn band_style(band: RiskBand) -> StyledObject<String> {
    let label = band.to_string();
    match band {
        RiskBand::High => style(label).red().bold(),
        RiskBand::Moderate => style(label).yellow().bold(),
        RiskBand::Low => style(label).green().bold(),
    }
}

fn virality_style(virality: Virality) -> StyledObject<String> {
    let label = virality.to_string();
    match virality {
        Virality::High => style(label).red(),
        Virality::Medium => style(label).yellow(),
        Virality::Low => style(label).green(),
    }
}

fn confidence_style(level: ConfidenceLevel) -> StyledObject<String> {
    let label = level.to_string();
    match level {
        ConfidenceLevel::High => style(label).green(),
        ConfidenceLevel::Medium => style(label).yellow(),
        ConfidenceLevel::Low => style(label).dim(),
    }
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n{}\n", style(title).bold()));
}

/// Render report as formatted terminal output
pub fn render(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", style("VeriLens Analysis").bold()));
    out.push_str(&format!(
        "{}\n",
        style("──────────────────────────────────────").dim()
    ));
    out.push_str(&format!(
        "Risk Score: {}  {}  Context: {}\n",
        style(format!("{}/100", report.risk_score)).bold(),
        band_style(report.risk_band),
        report.mode.label()
    ));
    out.push_str(&format!(
        "Confidence: {}  Uncertainty: {}\n",
        confidence_style(report.confidence.level),
        report.confidence.margin
    ));

    section(&mut out, "SIGNALS");
    if report.reasons.is_empty() {
        out.push_str("  No significant linguistic risk signals detected.\n");
    }
    for reason in &report.reasons {
        out.push_str(&format!("  • {reason}\n"));
    }

    section(&mut out, "VIRALITY");
    out.push_str(&format!(
        "  Expected spread potential: {}\n",
        virality_style(report.virality)
    ));

    section(&mut out, "HIGHEST RISK CLAIM");
    match report.highest_risk_claim() {
        Some(claim) => {
            out.push_str(&format!("  “{}”\n", style(&claim.claim).yellow()));
            out.push_str(&format!(
                "  {}\n",
                style(format!("Claim risk score: {}/100", claim.risk)).dim()
            ));
        }
        None => out.push_str("  No dominant high-risk claim identified.\n"),
    }

    section(&mut out, "RECOMMENDED ACTION");
    for action in &report.actions {
        out.push_str(&format!("  • {action}\n"));
    }

    section(&mut out, "VERIFICATION");
    if report.verification.flagged_claims.is_empty() {
        out.push_str("  No obvious unverifiable claims detected.\n");
    } else {
        out.push_str("  Claims that may require independent verification:\n");
        for claim in &report.verification.flagged_claims {
            out.push_str(&format!("    • {claim}\n"));
        }
    }
    out.push_str("  Suggested sources to consult:\n");
    for source in &report.verification.sources {
        out.push_str(&format!("    • {source}\n"));
    }
    out.push_str(&format!(
        "  {}\n",
        style(format!("Verification status: {}", report.verification.status)).dim()
    ));

    section(&mut out, "TONE");
    out.push_str(&format!("  {}\n", report.tone));

    out.push_str(&format!("\n{}\n", style(DISCLAIMER).dim()));
    out
}
