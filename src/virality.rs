//! Spread-potential estimate
//!
//! Independent of the risk score: looks only at trigger phrases,
//! `!`/`?` density and sentiment magnitude.

use crate::lexicon::Lexicon;
use crate::models::Virality;
use crate::sentiment;

pub const VIRALITY_TRIGGERS: Lexicon = Lexicon::new(&[
    "shocking",
    "breaking",
    "secret",
    "exposed",
    "miracle",
    "you won't believe",
    "truth revealed",
]);

/// Measurements the label rules are evaluated against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViralitySignals {
    /// Distinct trigger phrases present
    pub trigger_hits: usize,
    /// Count of `!` and `?`
    pub punctuation: usize,
    /// Absolute sentiment polarity
    pub intensity: f64,
}

impl ViralitySignals {
    pub fn measure(text: &str) -> Self {
        Self {
            trigger_hits: VIRALITY_TRIGGERS.count_present(text),
            punctuation: text.chars().filter(|c| matches!(c, '!' | '?')).count(),
            intensity: sentiment::polarity(text).abs(),
        }
    }
}

fn is_high(s: &ViralitySignals) -> bool {
    s.trigger_hits >= 2 || s.intensity > 0.5 || s.punctuation > 3
}

fn is_medium(s: &ViralitySignals) -> bool {
    s.trigger_hits == 1 || s.intensity > 0.3
}

/// Label rules, first match wins; no match is `Low`
const RULES: &[(Virality, fn(&ViralitySignals) -> bool)] =
    &[(Virality::High, is_high), (Virality::Medium, is_medium)];

pub fn classify(signals: &ViralitySignals) -> Virality {
    RULES
        .iter()
        .find(|(_, applies)| applies(signals))
        .map(|(label, _)| *label)
        .unwrap_or(Virality::Low)
}

/// Estimate how likely `text` is to spread
pub fn estimate_virality(text: &str) -> Virality {
    classify(&ViralitySignals::measure(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_trigger_is_medium() {
        let text = "Breaking news from the city council meeting tonight";
        assert_eq!(ViralitySignals::measure(text).trigger_hits, 1);
        assert_eq!(estimate_virality(text), Virality::Medium);
    }

    #[test]
    fn test_second_distinct_trigger_is_high() {
        let text = "Breaking news from the city council meeting tonight, files exposed";
        assert_eq!(estimate_virality(text), Virality::High);
    }

    #[test]
    fn test_repeated_trigger_counts_once() {
        let text = "breaking breaking breaking update on the roadworks";
        assert_eq!(ViralitySignals::measure(text).trigger_hits, 1);
        assert_eq!(estimate_virality(text), Virality::Medium);
    }

    #[test]
    fn test_curly_apostrophe_trigger() {
        let text = "You won\u{2019}t believe this new diet";
        assert_eq!(ViralitySignals::measure(text).trigger_hits, 1);
        assert_eq!(estimate_virality(text), Virality::Medium);
    }

    #[test]
    fn test_punctuation_threshold() {
        assert_eq!(estimate_virality("Is the park open today?!?"), Virality::Low);
        assert_eq!(estimate_virality("Is the park open today?!?!"), Virality::High);
    }

    #[test]
    fn test_sentiment_thresholds() {
        // poor: -0.4, terrible: -1.0
        assert_eq!(estimate_virality("a poor harvest this year"), Virality::Medium);
        assert_eq!(estimate_virality("a terrible harvest this year"), Virality::High);
        assert_eq!(estimate_virality("the harvest came in on schedule"), Virality::Low);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let signals = ViralitySignals {
            trigger_hits: 1,
            punctuation: 10,
            intensity: 0.0,
        };
        assert_eq!(classify(&signals), Virality::High);
    }
}
