//! One-time fitting of the risk classifier

use super::corpus::LabeledText;
use super::features::{Features, TfidfVectorizer};
use super::model::LogisticRegression;
use super::TextClassifier;
use crate::error::{Result, VerilensError};

/// Training configuration
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Gradient descent step size
    pub learning_rate: f64,
    /// Hard cap on gradient steps
    pub max_iterations: usize,
    /// Stop once the gradient norm drops below this
    pub tolerance: f64,
    /// Inverse regularization strength
    pub c: f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            max_iterations: 10_000,
            tolerance: 1e-8,
            c: 1.0,
        }
    }
}

/// Training result
#[derive(Debug, Clone)]
pub struct TrainResult {
    pub iterations: usize,
    pub final_loss: f64,
    pub converged: bool,
}

/// Fit vectorizer and model on a labeled corpus
pub fn train(corpus: &[LabeledText], config: &TrainConfig) -> Result<(TextClassifier, TrainResult)> {
    if corpus.is_empty() {
        return Err(VerilensError::InvalidCorpus("corpus is empty".into()));
    }
    let positives = corpus.iter().filter(|ex| ex.is_risky).count();
    if positives == 0 || positives == corpus.len() {
        return Err(VerilensError::InvalidCorpus(
            "corpus needs examples of both classes".into(),
        ));
    }

    let docs: Vec<&str> = corpus.iter().map(|ex| ex.text).collect();
    let labels: Vec<bool> = corpus.iter().map(|ex| ex.is_risky).collect();

    let vectorizer = TfidfVectorizer::fit(&docs);
    let features: Vec<Features> = docs.iter().map(|d| vectorizer.transform(d)).collect();

    let mut model = LogisticRegression::new(vectorizer.feature_count());
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        let grad_norm = model.train_step(&features, &labels, config.learning_rate, config.c);
        iterations += 1;
        if grad_norm < config.tolerance {
            converged = true;
            break;
        }
    }

    let final_loss = model.loss(&features, &labels, config.c);
    tracing::debug!(
        examples = corpus.len(),
        vocabulary = vectorizer.feature_count(),
        iterations,
        final_loss,
        converged,
        "Fitted risk classifier"
    );

    Ok((
        TextClassifier { vectorizer, model },
        TrainResult {
            iterations,
            final_loss,
            converged,
        },
    ))
}
