//! Sentence segmentation for claim extraction
//!
//! Text is split on period characters only. Runs separated by `!`, `?` or
//! newlines stay in one segment.

/// Segments must be strictly longer than this (in characters) to count as claims
pub const MIN_CLAIM_CHARS: usize = 20;

/// Split `text` into trimmed candidate claim sentences, in original order
pub fn claim_sentences(text: &str) -> Vec<&str> {
    text.split('.')
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_CLAIM_CHARS)
        .collect()
}

/// Whitespace-delimited token count
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
