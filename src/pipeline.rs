//! End-to-end analysis pipeline
//!
//! ```text
//! text ─┬─ score_text ──────────────┬─ recommend_action(mode)
//!       ├─ rank_claims (per sentence)│
//!       ├─ explain ── confidence_band
//!       ├─ estimate_virality
//!       └─ fact_check_assist
//! ```
//!
//! The [`Analyzer`] is built once at startup. Construction fits the
//! classifier; afterwards every call only reads it.

use crate::actions::recommend_action;
use crate::classifier::TextClassifier;
use crate::confidence::confidence_band;
use crate::config::ScoringConfig;
use crate::error::{Result, VerilensError};
use crate::explain::explain;
use crate::models::{AnalysisReport, Claim, DecisionMode, RiskScore, Tone};
use crate::scoring::{rank_claims, RiskScorer};
use crate::verification::fact_check_assist;
use crate::virality::estimate_virality;
use rayon::prelude::*;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Analyzer {
    scorer: RiskScorer,
}

impl Analyzer {
    /// Validate `config` and fit the classifier on the seed corpus
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        let classifier = TextClassifier::seeded()?;
        Ok(Self::with_classifier(classifier, config))
    }

    /// Use an already fitted classifier
    pub fn with_classifier(classifier: TextClassifier, config: ScoringConfig) -> Self {
        Self {
            scorer: RiskScorer::new(classifier, config),
        }
    }

    pub fn scorer(&self) -> &RiskScorer {
        &self.scorer
    }

    pub fn score_text(&self, text: &str) -> (RiskScore, Tone) {
        self.scorer.score_text(text)
    }

    pub fn rank_claims(&self, text: &str) -> Vec<Claim> {
        rank_claims(&self.scorer, text)
    }

    /// Run every stage on `text`. Blank input is rejected.
    pub fn analyze(&self, text: &str, mode: DecisionMode) -> Result<AnalysisReport> {
        if text.trim().is_empty() {
            return Err(VerilensError::InvalidInput);
        }

        let (risk_score, tone) = self.score_text(text);
        let claims = self.rank_claims(text);
        let virality = estimate_virality(text);
        let reasons = explain(text, risk_score);
        let confidence = confidence_band(reasons.len());
        let actions = recommend_action(risk_score, mode);
        let verification = fact_check_assist(text);

        debug!(
            claims = claims.len(),
            signals = reasons.len(),
            flagged = verification.flagged_claims.len(),
            "Pipeline stages complete"
        );
        info!(
            risk = risk_score.value(),
            %tone,
            %virality,
            confidence = %confidence.level,
            %mode,
            "Analyzed text"
        );

        Ok(AnalysisReport {
            mode,
            risk_score,
            risk_band: risk_score.band(),
            tone,
            claims,
            virality,
            reasons,
            confidence,
            actions,
            verification,
        })
    }

    /// Analyze independent texts in parallel, keeping input order
    pub fn analyze_batch<S>(&self, texts: &[S], mode: DecisionMode) -> Vec<Result<AnalysisReport>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref(), mode))
            .collect()
    }
}
