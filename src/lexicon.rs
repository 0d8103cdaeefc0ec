//! Fixed keyword lists and case-insensitive substring matching
//!
//! Every rule table in the crate is backed by a [`Lexicon`]. Matching is
//! substring containment against lowercased text, so "government" also
//! matches "governments" and "secret" matches "secretary". Typographic
//! apostrophes (U+2019) are folded to `'` first.

/// An ordered, fixed list of lowercase trigger phrases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexicon {
    terms: &'static [&'static str],
}

impl Lexicon {
    pub const fn new(terms: &'static [&'static str]) -> Self {
        Self { terms }
    }

    /// True if any term occurs in `text` (case-insensitive)
    pub fn matches_any(&self, text: &str) -> bool {
        let lower = normalize(text);
        self.terms.iter().any(|term| lower.contains(term))
    }

    /// Number of distinct terms present in `text`.
    ///
    /// A term occurring several times still counts once.
    pub fn count_present(&self, text: &str) -> usize {
        let lower = normalize(text);
        self.terms.iter().filter(|term| lower.contains(*term)).count()
    }
}

fn normalize(text: &str) -> String {
    text.to_lowercase().replace('\u{2019}', "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: Lexicon = Lexicon::new(&["red", "green", "light blue"]);

    #[test]
    fn test_matches_case_insensitive() {
        assert!(COLORS.matches_any("The RED door"));
        assert!(COLORS.matches_any("a Light Blue sky"));
        assert!(!COLORS.matches_any("purple"));
    }

    #[test]
    fn test_count_is_per_distinct_term() {
        assert_eq!(COLORS.count_present("red red red"), 1);
        assert_eq!(COLORS.count_present("red and green"), 2);
        assert_eq!(COLORS.count_present(""), 0);
    }

    #[test]
    fn test_curly_apostrophe_matches_straight_term() {
        const PHRASES: Lexicon = Lexicon::new(&["you won't believe"]);
        assert!(PHRASES.matches_any("YOU WON\u{2019}T BELIEVE it"));
        assert!(PHRASES.matches_any("you won't believe it"));
        assert_eq!(PHRASES.count_present("You won\u{2019}t believe"), 1);
    }
}
