//! Misinformation risk scoring
//!
//! # Scoring Formula
//!
//! ```text
//! base  = trunc(P(risky | text) × 100)
//! score = base
//!   if score < 50 and |polarity| < 0.2:   score = max(5, score - 30)
//!   if text names an authoritative entity: score = max(0, score - 20)
//! score = clamp(score, 0, 100)
//! tone  = Emotional if |polarity| > 0.4 else Neutral
//! ```
//!
//! All constants come from [`ScoringConfig`]; the values above are the
//! defaults.

pub mod adjust;
mod claims;

pub use adjust::{adjust, Adjustment, AdjustmentContext, ADJUSTMENTS, AUTHORITATIVE_ENTITIES};
pub use claims::rank_claims;

use crate::classifier::TextClassifier;
use crate::config::ScoringConfig;
use crate::models::{RiskScore, Tone};
use crate::sentiment;

/// Classifier plus heuristic adjustments. Read-only after construction.
#[derive(Debug, Clone)]
pub struct RiskScorer {
    classifier: TextClassifier,
    config: ScoringConfig,
}

impl RiskScorer {
    pub fn new(classifier: TextClassifier, config: ScoringConfig) -> Self {
        Self { classifier, config }
    }

    /// Score `text` and label its tone.
    ///
    /// Does not special-case empty input; blank text is rejected upstream.
    pub fn score_text(&self, text: &str) -> (RiskScore, Tone) {
        let base = self.classifier.predict(text).scaled();
        let polarity = sentiment::polarity(text);

        let ctx = AdjustmentContext { text, polarity };
        let score = RiskScore::clamped(adjust(base, &ctx, &self.config));
        let tone = sentiment::tone(polarity, self.config.emotional_polarity_threshold);

        tracing::trace!(base, polarity, score = score.value(), %tone, "Scored text");
        (score, tone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> RiskScorer {
        RiskScorer::new(TextClassifier::seeded().unwrap(), ScoringConfig::default())
    }

    #[test]
    fn test_clickbait_scores_above_institutional() {
        let scorer = scorer();
        let (risky, tone) = scorer.score_text("Breaking: shocking miracle cure exposed by secret sources!!!");
        let (calm, _) = scorer
            .score_text("The Ministry of Health announced a new policy today following a peer reviewed study.");
        assert!(risky > calm);
        assert_eq!(tone, Tone::Emotional);
    }

    #[test]
    fn test_authority_reduces_score() {
        let scorer = scorer();
        let (without, _) = scorer.score_text("Shocking miracle cure news");
        let (with, _) = scorer.score_text("Shocking miracle cure news from the commission");
        assert_eq!(with.value() + 20, without.value());
    }

    #[test]
    fn test_neutral_text_is_dampened() {
        let scorer = scorer();
        let (score, tone) = scorer.score_text("Official government report released today");
        assert_eq!(tone, Tone::Neutral);
        assert!(score.value() < 35);
    }

    #[test]
    fn test_adversarial_inputs_stay_in_range() {
        let scorer = scorer();
        let inputs = [
            "court court court ministry government authority",
            "shocking shocking shocking breaking miracle cure believe won news",
            "!!!???",
            " ",
            "\u{1F4A5}\u{1F4A5}\u{1F4A5}",
        ];
        for input in inputs {
            let (score, _) = scorer.score_text(input);
            assert!(score <= RiskScore::MAX, "{input}");
        }
    }
}
