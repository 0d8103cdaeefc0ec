//! Statistical risk classifier
//!
//! Architecture: TF-IDF features → logistic regression → probability.
//!
//! The classifier is fit exactly once from the seed corpus and then only
//! read. It holds no interior mutability, so a shared reference can be used
//! from any number of threads.

pub mod corpus;
pub mod features;
pub mod model;
mod stop_words;
pub mod train;

pub use corpus::{LabeledText, SEED_CORPUS};
pub use features::{Features, TfidfVectorizer};
pub use model::{LogisticRegression, Prediction};
pub use train::{train, TrainConfig, TrainResult};

use crate::error::Result;

/// Fitted vectorizer and model
#[derive(Debug, Clone)]
pub struct TextClassifier {
    vectorizer: TfidfVectorizer,
    model: LogisticRegression,
}

impl TextClassifier {
    /// Fit on the built-in seed corpus
    pub fn seeded() -> Result<Self> {
        let (classifier, _) = Self::fit(SEED_CORPUS, &TrainConfig::default())?;
        Ok(classifier)
    }

    /// Fit on `corpus`, warning if training stops before converging
    pub fn fit(corpus: &[LabeledText], config: &TrainConfig) -> Result<(Self, TrainResult)> {
        let (classifier, result) = train(corpus, config)?;
        if !result.converged {
            tracing::warn!(
                iterations = result.iterations,
                final_loss = result.final_loss,
                "Risk classifier did not converge"
            );
        }
        Ok((classifier, result))
    }

    pub fn predict(&self, text: &str) -> Prediction {
        let features = self.vectorizer.transform(text);
        self.model.predict(&features)
    }
}
