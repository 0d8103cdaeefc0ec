//! Binary logistic regression
//!
//! L2-regularized, unpenalized intercept. Weights are fit once by
//! full-batch gradient descent and never mutated afterwards.

use super::features::Features;

/// Prediction result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Probability the text resembles misinformation-style writing
    pub risk_probability: f64,
}

impl Prediction {
    /// Probability scaled to 0-100 by truncation
    pub fn scaled(&self) -> i64 {
        (self.risk_probability * 100.0) as i64
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

#[derive(Debug, Clone)]
pub struct LogisticRegression {
    weights: Vec<f64>,
    intercept: f64,
}

impl LogisticRegression {
    /// Zero-initialized model over `input_size` features
    pub fn new(input_size: usize) -> Self {
        Self {
            weights: vec![0.0; input_size],
            intercept: 0.0,
        }
    }

    pub fn predict(&self, features: &Features) -> Prediction {
        Prediction {
            risk_probability: sigmoid(features.dot(&self.weights) + self.intercept),
        }
    }

    /// Objective: 0.5 * |w|^2 + c * sum(log loss)
    pub fn loss(&self, features: &[Features], labels: &[bool], c: f64) -> f64 {
        let penalty = 0.5 * self.weights.iter().map(|w| w * w).sum::<f64>();
        let data: f64 = features
            .iter()
            .zip(labels)
            .map(|(x, &y)| {
                let p = self.predict(x).risk_probability.clamp(1e-12, 1.0 - 1e-12);
                if y {
                    -p.ln()
                } else {
                    -(1.0 - p).ln()
                }
            })
            .sum();
        penalty + c * data
    }

    /// One full-batch gradient step. Returns the gradient norm before the step.
    pub fn train_step(
        &mut self,
        features: &[Features],
        labels: &[bool],
        learning_rate: f64,
        c: f64,
    ) -> f64 {
        let mut grad_w = self.weights.clone();
        let mut grad_b = 0.0;

        for (x, &y) in features.iter().zip(labels) {
            let target = if y { 1.0 } else { 0.0 };
            let err = self.predict(x).risk_probability - target;
            for (g, xi) in grad_w.iter_mut().zip(&x.values) {
                *g += c * err * xi;
            }
            grad_b += c * err;
        }

        let grad_norm = (grad_w.iter().map(|g| g * g).sum::<f64>() + grad_b * grad_b).sqrt();

        for (w, g) in self.weights.iter_mut().zip(&grad_w) {
            *w -= learning_rate * g;
        }
        self.intercept -= learning_rate * grad_b;

        grad_norm
    }
}
