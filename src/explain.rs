//! Human-readable reasons behind a risk score
//!
//! A fixed catalogue of signals, each emitted at most once, always in
//! catalogue order. The number of signals drives the confidence band.

use crate::lexicon::Lexicon;
use crate::models::RiskScore;
use crate::segment;
use serde::{Serialize, Serializer};
use std::fmt;

pub const SENSATIONAL_WORDS: Lexicon = Lexicon::new(&[
    "breaking",
    "shocking",
    "miracle",
    "exposed",
    "you won't believe",
    "secret",
    "revealed",
]);

pub const INSTITUTIONAL_KEYWORDS: Lexicon = Lexicon::new(&[
    "reserve bank",
    "ministry",
    "government",
    "central bank",
    "announced",
    "reported by",
    "according to",
    "official",
    "policy",
]);

pub const EMOTIONAL_WORDS: Lexicon =
    Lexicon::new(&["outrage", "fear", "anger", "panic", "hate", "destroy"]);

/// Texts shorter than this many words get the limited-context signal
pub const MIN_CONTEXT_WORDS: usize = 25;

/// Scores below this with no other signal get the neutral note
pub const NEUTRAL_NOTE_CEILING: u8 = 35;

/// One explanation, serialized as its reason text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    SensationalLanguage,
    MissingAttribution,
    EmotionalLanguage,
    LimitedContext,
    NeutralLanguage,
}

impl Signal {
    pub fn reason(self) -> &'static str {
        match self {
            Signal::SensationalLanguage => {
                "Uses sensational or clickbait-style language commonly associated with misinformation spread."
            }
            Signal::MissingAttribution => {
                "Does not reference a clearly identifiable institution or authoritative source."
            }
            Signal::EmotionalLanguage => {
                "Contains emotionally charged language that may influence reader reaction."
            }
            Signal::LimitedContext => {
                "Very short content length provides limited context for reliable interpretation."
            }
            Signal::NeutralLanguage => {
                "Language appears neutral and informational, with no strong misinformation indicators detected."
            }
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

impl Serialize for Signal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.reason())
    }
}

/// What makes a catalogue entry fire
#[derive(Debug, Clone, Copy)]
enum Trigger {
    AnyOf(Lexicon),
    NoneOf(Lexicon),
    FewerWordsThan(usize),
}

impl Trigger {
    fn fires(&self, text: &str) -> bool {
        match self {
            Trigger::AnyOf(lexicon) => lexicon.matches_any(text),
            Trigger::NoneOf(lexicon) => !lexicon.matches_any(text),
            Trigger::FewerWordsThan(n) => segment::word_count(text) < *n,
        }
    }
}

const CATALOGUE: &[(Signal, Trigger)] = &[
    (Signal::SensationalLanguage, Trigger::AnyOf(SENSATIONAL_WORDS)),
    (Signal::MissingAttribution, Trigger::NoneOf(INSTITUTIONAL_KEYWORDS)),
    (Signal::EmotionalLanguage, Trigger::AnyOf(EMOTIONAL_WORDS)),
    (Signal::LimitedContext, Trigger::FewerWordsThan(MIN_CONTEXT_WORDS)),
];

/// Explain `text` given its risk score
pub fn explain(text: &str, risk: RiskScore) -> Vec<Signal> {
    let mut signals: Vec<Signal> = CATALOGUE
        .iter()
        .filter(|(_, trigger)| trigger.fires(text))
        .map(|(signal, _)| *signal)
        .collect();

    if signals.is_empty() && risk.value() < NEUTRAL_NOTE_CEILING {
        signals.push(Signal::NeutralLanguage);
    }
    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risk(v: i64) -> RiskScore {
        RiskScore::clamped(v)
    }

    /// `n` filler words with an institutional keyword and nothing else
    fn attributed_text(n: usize) -> String {
        let mut words = vec!["according", "to"];
        words.extend(std::iter::repeat("data").take(n - 2));
        words.join(" ")
    }

    #[test]
    fn test_clickbait_signals_in_order() {
        let signals = explain("Breaking: shocking miracle cure exposed by secret sources!!!", risk(58));
        assert_eq!(
            signals,
            vec![
                Signal::SensationalLanguage,
                Signal::MissingAttribution,
                Signal::LimitedContext
            ]
        );
    }

    #[test]
    fn test_curly_apostrophe_is_sensational() {
        let signals = explain("You won\u{2019}t believe this new diet", risk(50));
        assert_eq!(signals[0], Signal::SensationalLanguage);
    }

    #[test]
    fn test_emotional_words() {
        let signals = explain("Panic spreads as officials stay silent", risk(50));
        assert!(signals.contains(&Signal::EmotionalLanguage));
    }

    #[test]
    fn test_word_count_boundary() {
        let at = attributed_text(25);
        assert_eq!(explain(&at, risk(20)), vec![Signal::NeutralLanguage]);

        let below = attributed_text(24);
        assert_eq!(explain(&below, risk(20)), vec![Signal::LimitedContext]);
    }

    #[test]
    fn test_neutral_note_needs_low_risk() {
        let text = attributed_text(30);
        assert_eq!(explain(&text, risk(34)), vec![Signal::NeutralLanguage]);
        assert!(explain(&text, risk(35)).is_empty());
    }

    #[test]
    fn test_attribution_is_absence_triggered() {
        let signals = explain("The Ministry of Health announced a new policy today", risk(0));
        assert!(!signals.contains(&Signal::MissingAttribution));
        let signals = explain("People are saying a new rule starts today", risk(0));
        assert!(signals.contains(&Signal::MissingAttribution));
    }

    #[test]
    fn test_signal_serializes_as_reason() {
        let json = serde_json::to_string(&Signal::LimitedContext).unwrap();
        assert_eq!(
            json,
            "\"Very short content length provides limited context for reliable interpretation.\""
        );
    }
}
