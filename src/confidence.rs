//! Confidence band from the number of explanation signals
//!
//! The risk score is deliberately not an input: two texts with the same
//! signal count get the same band whatever their scores.

use crate::models::{ConfidenceBand, ConfidenceLevel};

/// (minimum signal count, level, margin), checked top to bottom
const BANDS: &[(usize, ConfidenceLevel, &str)] = &[
    (3, ConfidenceLevel::High, "±8%"),
    (2, ConfidenceLevel::Medium, "±12%"),
];

const FALLBACK: ConfidenceBand = ConfidenceBand {
    level: ConfidenceLevel::Low,
    margin: "±18%",
};

pub fn confidence_band(signal_count: usize) -> ConfidenceBand {
    BANDS
        .iter()
        .find(|(min, _, _)| signal_count >= *min)
        .map(|&(_, level, margin)| ConfidenceBand { level, margin })
        .unwrap_or(FALLBACK)
}
