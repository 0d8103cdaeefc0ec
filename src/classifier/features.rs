//! TF-IDF feature extraction
//!
//! Tokens are lowercase runs of two or more word characters. Stop words are
//! dropped, the vocabulary is sorted, idf is smoothed and every row is
//! L2-normalized.

use super::stop_words::ENGLISH_STOP_WORDS;
use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

static TOKEN: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("valid token regex"))
}

/// Dense feature vector for one text
#[derive(Debug, Clone, PartialEq)]
pub struct Features {
    pub values: Vec<f64>,
}

impl Features {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn dot(&self, weights: &[f64]) -> f64 {
        self.values.iter().zip(weights).map(|(x, w)| x * w).sum()
    }
}

/// Lowercase, tokenize and drop stop words
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    token_regex()
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| !ENGLISH_STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Term-frequency / inverse-document-frequency vectorizer
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: FxHashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Learn vocabulary and idf weights from `docs`
    pub fn fit<S: AsRef<str>>(docs: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = docs.iter().map(|d| tokenize(d.as_ref())).collect();

        let mut terms: Vec<&String> = tokenized.iter().flatten().collect();
        terms.sort();
        terms.dedup();

        let vocabulary: FxHashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        let mut df = vec![0usize; vocabulary.len()];
        for doc in &tokenized {
            let mut seen = vec![false; vocabulary.len()];
            for token in doc {
                let idx = vocabulary[token];
                if !seen[idx] {
                    seen[idx] = true;
                    df[idx] += 1;
                }
            }
        }

        let n = docs.len() as f64;
        let idf = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Vectorize `text`. Unknown terms are ignored; no known terms gives zeros.
    pub fn transform(&self, text: &str) -> Features {
        let mut values = vec![0.0f64; self.vocabulary.len()];
        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                values[idx] += 1.0;
            }
        }

        for (v, idf) in values.iter_mut().zip(&self.idf) {
            *v *= idf;
        }

        let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for v in values.iter_mut() {
                *v /= norm;
            }
        }

        Features::new(values)
    }

    /// Number of features produced by `transform`
    pub fn feature_count(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}
