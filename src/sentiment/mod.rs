//! Lexicon-based sentiment polarity
//!
//! Polarity is the mean value of the words found in the polarity lexicon,
//! adjusted for a directly preceding intensifier and for a negation within
//! the two preceding tokens. Texts with no scored words are neutral (0.0).

mod words;

use crate::models::Tone;
use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;
use words::{INTENSIFIERS, NEGATIONS, NEGATION_FACTOR, POLARITY};

static WORD_TOKEN: OnceLock<Regex> = OnceLock::new();
static POLARITY_TABLE: OnceLock<FxHashMap<&'static str, f64>> = OnceLock::new();

fn word_token_regex() -> &'static Regex {
    WORD_TOKEN.get_or_init(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("valid word regex"))
}

fn polarity_table() -> &'static FxHashMap<&'static str, f64> {
    POLARITY_TABLE.get_or_init(|| POLARITY.iter().copied().collect())
}

fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, factor)| *factor)
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

/// Sentiment polarity of `text` in [-1.0, 1.0]
pub fn polarity(text: &str) -> f64 {
    let lower = text.to_lowercase().replace('\u{2019}', "'");
    let tokens: Vec<&str> = word_token_regex()
        .find_iter(&lower)
        .map(|m| m.as_str())
        .collect();

    let table = polarity_table();
    let mut total = 0.0;
    let mut scored = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        let Some(&base) = table.get(token) else {
            continue;
        };

        let mut value = base;
        if let Some(factor) = i.checked_sub(1).and_then(|p| intensity(tokens[p])) {
            value = (value * factor).clamp(-1.0, 1.0);
        }
        if tokens[i.saturating_sub(2)..i].iter().any(|t| is_negation(t)) {
            value *= NEGATION_FACTOR;
        }

        total += value;
        scored += 1;
    }

    if scored == 0 {
        return 0.0;
    }
    (total / scored as f64).clamp(-1.0, 1.0)
}

/// Tone label for a polarity: emotional when its magnitude exceeds `threshold`
pub fn tone(polarity: f64, threshold: f64) -> Tone {
    if polarity.abs() > threshold {
        Tone::Emotional
    } else {
        Tone::Neutral
    }
}
