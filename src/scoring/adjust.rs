//! Rule-based corrections to the classifier score
//!
//! Rules run in table order; each sees the score left by the previous one.

use crate::config::ScoringConfig;
use crate::lexicon::Lexicon;

/// Phrases naming an authoritative institution
pub const AUTHORITATIVE_ENTITIES: Lexicon = Lexicon::new(&[
    "reserve bank",
    "central bank",
    "ministry",
    "government",
    "authority",
    "commission",
    "department",
    "court",
    "supreme court",
]);

/// Inputs every adjustment rule can look at
#[derive(Debug, Clone, Copy)]
pub struct AdjustmentContext<'a> {
    pub text: &'a str,
    pub polarity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Low-scoring text with near-zero sentiment is pushed further down
    NeutralTone,
    /// Text naming an authoritative institution is pushed down
    AuthoritativeEntity,
}

/// Adjustments in application order
pub const ADJUSTMENTS: &[Adjustment] = &[Adjustment::NeutralTone, Adjustment::AuthoritativeEntity];

impl Adjustment {
    pub fn applies(&self, score: i64, ctx: &AdjustmentContext<'_>, config: &ScoringConfig) -> bool {
        match self {
            Adjustment::NeutralTone => {
                score < config.neutral_score_ceiling
                    && ctx.polarity.abs() < config.neutral_polarity_threshold
            }
            Adjustment::AuthoritativeEntity => AUTHORITATIVE_ENTITIES.matches_any(ctx.text),
        }
    }

    pub fn apply(&self, score: i64, config: &ScoringConfig) -> i64 {
        match self {
            Adjustment::NeutralTone => (score - config.neutral_penalty).max(config.neutral_floor),
            Adjustment::AuthoritativeEntity => (score - config.authority_penalty).max(0),
        }
    }
}

/// Run every applicable adjustment over `score`
pub fn adjust(score: i64, ctx: &AdjustmentContext<'_>, config: &ScoringConfig) -> i64 {
    ADJUSTMENTS.iter().fold(score, |score, rule| {
        if rule.applies(score, ctx, config) {
            let adjusted = rule.apply(score, config);
            tracing::trace!(?rule, from = score, to = adjusted, "Applied score adjustment");
            adjusted
        } else {
            score
        }
    })
}
