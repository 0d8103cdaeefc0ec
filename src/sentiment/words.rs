//! Polarity lexicon
//!
//! Values follow the adjective/adverb polarity scale used by common
//! pattern-style sentiment lexicons: -1.0 (most negative) to 1.0.

pub(super) const POLARITY: &[(&str, f64)] = &[
    // negative
    ("abusive", -0.6),
    ("afraid", -0.6),
    ("alarming", -0.6),
    ("angry", -0.5),
    ("annoying", -0.8),
    ("appalling", -1.0),
    ("awful", -1.0),
    ("bad", -0.7),
    ("bitter", -0.1),
    ("broken", -0.4),
    ("corrupt", -0.5),
    ("crazy", -0.6),
    ("cruel", -1.0),
    ("dangerous", -0.6),
    ("dead", -0.2),
    ("deadly", -0.2),
    ("disastrous", -1.0),
    ("disgusting", -1.0),
    ("dishonest", -0.6),
    ("dreadful", -1.0),
    ("evil", -1.0),
    ("fake", -0.5),
    ("false", -0.4),
    ("furious", -0.5),
    ("guilty", -0.5),
    ("harmful", -0.5),
    ("horrible", -1.0),
    ("horrific", -1.0),
    ("hostile", -0.5),
    ("illegal", -0.5),
    ("insane", -1.0),
    ("lying", -0.5),
    ("mad", -0.6),
    ("miserable", -1.0),
    ("outrageous", -1.0),
    ("pathetic", -1.0),
    ("poor", -0.4),
    ("ridiculous", -0.3),
    ("sad", -0.5),
    ("scary", -0.5),
    ("secret", -0.4),
    ("shameful", -0.7),
    ("shocking", -1.0),
    ("sick", -0.7),
    ("stupid", -0.8),
    ("terrible", -1.0),
    ("terrifying", -1.0),
    ("toxic", -0.5),
    ("tragic", -0.75),
    ("ugly", -0.7),
    ("unfair", -0.5),
    ("unsafe", -0.5),
    ("useless", -0.5),
    ("violent", -0.8),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
    // positive
    ("accurate", 0.4),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("brilliant", 0.9),
    ("calm", 0.3),
    ("clear", 0.1),
    ("correct", 0.35),
    ("effective", 0.6),
    ("excellent", 1.0),
    ("exciting", 0.3),
    ("fantastic", 0.4),
    ("fair", 0.7),
    ("fine", 0.4),
    ("fortunate", 0.4),
    ("free", 0.4),
    ("glad", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("healthy", 0.5),
    ("helpful", 0.5),
    ("honest", 0.6),
    ("hopeful", 0.5),
    ("important", 0.4),
    ("impressive", 1.0),
    ("incredible", 0.9),
    ("love", 0.5),
    ("lovely", 0.5),
    ("lucky", 0.33),
    ("new", 0.136),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("positive", 0.23),
    ("powerful", 0.3),
    ("reliable", 0.5),
    ("safe", 0.5),
    ("significant", 0.375),
    ("strong", 0.43),
    ("stunning", 0.5),
    ("successful", 0.75),
    ("superb", 1.0),
    ("true", 0.35),
    ("trusted", 0.3),
    ("unbelievable", 0.5),
    ("useful", 0.3),
    ("valuable", 0.5),
    ("wonderful", 1.0),
];

/// Multiplier applied to the following scored word
pub(super) const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("completely", 1.5),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("really", 1.3),
    ("so", 1.3),
    ("totally", 1.5),
    ("truly", 1.3),
    ("very", 1.3),
];

pub(super) const NEGATIONS: &[&str] = &["not", "never", "no", "nothing", "nor", "without"];

/// Score multiplier when a negation precedes a scored word
pub(super) const NEGATION_FACTOR: f64 = -0.5;
