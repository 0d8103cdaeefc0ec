//! Recommended next steps by decision mode and risk

use crate::models::{DecisionMode, RiskScore};

pub const HIGH_STAKES_HOLD: &[&str] = &[
    "Delay publication until verification",
    "Cross-check with trusted institutional sources",
    "Flag for editorial or expert review",
];
pub const HIGH_STAKES_PROCEED: &[&str] = &["Proceed with caution and source attribution"];

pub const INFORMATIONAL_HIGH: &[&str] = &["Avoid sharing until verified", "Consult trusted news sources"];
pub const INFORMATIONAL_MODERATE: &[&str] = &["Verify key claims before sharing"];
pub const INFORMATIONAL_LOW: &[&str] = &["No immediate action required"];

/// (minimum risk, actions) per mode, highest threshold first.
/// Each table ends with a zero threshold so every score matches.
fn table(mode: DecisionMode) -> &'static [(u8, &'static [&'static str])] {
    match mode {
        DecisionMode::HighStakes => &[(50, HIGH_STAKES_HOLD), (0, HIGH_STAKES_PROCEED)],
        DecisionMode::Informational => &[
            (70, INFORMATIONAL_HIGH),
            (40, INFORMATIONAL_MODERATE),
            (0, INFORMATIONAL_LOW),
        ],
    }
}

pub fn recommend_action(risk: RiskScore, mode: DecisionMode) -> Vec<&'static str> {
    table(mode)
        .iter()
        .find(|(min, _)| risk.value() >= *min)
        .map(|(_, actions)| actions.to_vec())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(risk: i64, mode: DecisionMode) -> Vec<&'static str> {
        recommend_action(RiskScore::clamped(risk), mode)
    }

    #[test]
    fn test_informational_boundaries() {
        let mode = DecisionMode::Informational;
        assert_eq!(actions(69, mode), INFORMATIONAL_MODERATE);
        assert_eq!(actions(70, mode), INFORMATIONAL_HIGH);
        assert_eq!(actions(71, mode), INFORMATIONAL_HIGH);
        assert_eq!(actions(40, mode), INFORMATIONAL_MODERATE);
        assert_eq!(actions(39, mode), INFORMATIONAL_LOW);
        assert_eq!(actions(0, mode), INFORMATIONAL_LOW);
    }

    #[test]
    fn test_high_stakes_boundaries() {
        let mode = DecisionMode::HighStakes;
        assert_eq!(actions(49, mode), HIGH_STAKES_PROCEED);
        assert_eq!(actions(50, mode), HIGH_STAKES_HOLD);
        assert_eq!(actions(100, mode), HIGH_STAKES_HOLD);
    }

    #[test]
    fn test_never_empty() {
        for mode in [DecisionMode::Informational, DecisionMode::HighStakes] {
            for risk in 0..=100 {
                assert!(!actions(risk, mode).is_empty());
            }
        }
    }
}
