//! Core data models for analysis results

use crate::error::VerilensError;
use crate::explain::Signal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Misinformation risk on a 0-100 scale.
///
/// Construction always clamps, so a `RiskScore` is in range by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(u8);

impl RiskScore {
    pub const MIN: RiskScore = RiskScore(0);
    pub const MAX: RiskScore = RiskScore(100);

    /// Clamp an intermediate score into [0, 100]
    pub fn clamped(raw: i64) -> Self {
        Self(raw.clamp(0, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Dashboard band for this score
    pub fn band(self) -> RiskBand {
        RiskBand::from_score(self)
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse tone label derived from sentiment polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Emotional,
    Neutral,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Emotional => write!(f, "Emotional"),
            Tone::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Risk band shown next to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub fn from_score(score: RiskScore) -> Self {
        match score.value() {
            71..=u8::MAX => RiskBand::High,
            41..=70 => RiskBand::Moderate,
            _ => RiskBand::Low,
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskBand::Low => write!(f, "Low Risk"),
            RiskBand::Moderate => write!(f, "Moderate Risk"),
            RiskBand::High => write!(f, "High Risk"),
        }
    }
}

/// A single sentence scored on its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub claim: String,
    pub risk: RiskScore,
    pub tone: Tone,
}

/// Expected spread potential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Virality {
    Low,
    Medium,
    High,
}

impl fmt::Display for Virality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Virality::Low => write!(f, "Low"),
            Virality::Medium => write!(f, "Medium"),
            Virality::High => write!(f, "High"),
        }
    }
}

/// Confidence in the score, driven only by how many signals fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLevel::Low => write!(f, "Low"),
            ConfidenceLevel::Medium => write!(f, "Medium"),
            ConfidenceLevel::High => write!(f, "High"),
        }
    }
}

/// Confidence label paired with its uncertainty margin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfidenceBand {
    #[serde(rename = "confidence_label")]
    pub level: ConfidenceLevel,
    #[serde(rename = "uncertainty_margin")]
    pub margin: &'static str,
}

/// Context the caller is deciding in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DecisionMode {
    #[default]
    Informational,
    #[serde(rename = "High-Stakes")]
    HighStakes,
}

impl DecisionMode {
    /// Long-form label for display
    pub fn label(self) -> &'static str {
        match self {
            DecisionMode::Informational => "Informational",
            DecisionMode::HighStakes => "High-Stakes (Journalism / Policy)",
        }
    }
}

impl FromStr for DecisionMode {
    type Err = VerilensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "informational" | "info" => Ok(DecisionMode::Informational),
            "high-stakes" | "high_stakes" | "highstakes" | "high-stakes (journalism / policy)" => {
                Ok(DecisionMode::HighStakes)
            }
            _ => Err(VerilensError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for DecisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionMode::Informational => write!(f, "Informational"),
            DecisionMode::HighStakes => write!(f, "High-Stakes"),
        }
    }
}

/// Claims that look like they need independent checking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationTriage {
    #[serde(rename = "verification_flagged_claims")]
    pub flagged_claims: Vec<String>,
    #[serde(rename = "verification_sources")]
    pub sources: Vec<&'static str>,
    #[serde(rename = "verification_status")]
    pub status: &'static str,
}

/// Full result of analyzing one text. Every field is always populated.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub mode: DecisionMode,
    pub risk_score: RiskScore,
    pub risk_band: RiskBand,
    pub tone: Tone,
    pub claims: Vec<Claim>,
    pub virality: Virality,
    pub reasons: Vec<Signal>,
    #[serde(flatten)]
    pub confidence: ConfidenceBand,
    pub actions: Vec<&'static str>,
    #[serde(flatten)]
    pub verification: VerificationTriage,
}

impl AnalysisReport {
    /// Claim with the highest risk, if any sentence qualified
    pub fn highest_risk_claim(&self) -> Option<&Claim> {
        self.claims.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_score_clamps() {
        assert_eq!(RiskScore::clamped(-40), RiskScore::MIN);
        assert_eq!(RiskScore::clamped(250), RiskScore::MAX);
        assert_eq!(RiskScore::clamped(42).value(), 42);
    }

    #[test]
    fn test_risk_band_boundaries() {
        assert_eq!(RiskScore::clamped(40).band(), RiskBand::Low);
        assert_eq!(RiskScore::clamped(41).band(), RiskBand::Moderate);
        assert_eq!(RiskScore::clamped(70).band(), RiskBand::Moderate);
        assert_eq!(RiskScore::clamped(71).band(), RiskBand::High);
    }

    #[test]
    fn test_mode_parsing_is_closed() {
        assert_eq!(
            "Informational".parse::<DecisionMode>().unwrap(),
            DecisionMode::Informational
        );
        assert_eq!(
            "High-Stakes".parse::<DecisionMode>().unwrap(),
            DecisionMode::HighStakes
        );
        assert_eq!(
            "High-Stakes (Journalism / Policy)".parse::<DecisionMode>().unwrap(),
            DecisionMode::HighStakes
        );
        assert!(matches!(
            "High-Stakes-ish".parse::<DecisionMode>(),
            Err(VerilensError::UnknownMode(_))
        ));
        assert!("".parse::<DecisionMode>().is_err());
    }

    #[test]
    fn test_risk_score_serializes_as_integer() {
        let claim = Claim {
            claim: "x".into(),
            risk: RiskScore::clamped(55),
            tone: Tone::Neutral,
        };
        let json = serde_json::to_value(&claim).unwrap();
        assert_eq!(json["risk"], 55);
        assert_eq!(json["tone"], "Neutral");
    }
}
