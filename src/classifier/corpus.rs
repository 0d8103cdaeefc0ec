//! Labeled seed corpus the risk classifier is fit on

/// A text with its label (true = misinformation-style writing)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledText {
    pub text: &'static str,
    pub is_risky: bool,
}

impl LabeledText {
    pub const fn new(text: &'static str, is_risky: bool) -> Self {
        Self { text, is_risky }
    }
}

/// Two clickbait-style and two institutional-style examples
pub const SEED_CORPUS: &[LabeledText] = &[
    LabeledText::new("Breaking shocking news you won't believe", true),
    LabeledText::new("Official government report released today", false),
    LabeledText::new("Miracle cure doctors don't want you to know", true),
    LabeledText::new("Peer reviewed scientific study published", false),
];
