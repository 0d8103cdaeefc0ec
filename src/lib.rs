//! VeriLens - explainable early misinformation-risk scoring
//!
//! Scores a short passage for misinformation-style writing, ranks its
//! sentences by risk, estimates spread potential and explains the result.
//! It is decision support, not a fact checker: nothing here asserts whether
//! a claim is true.
//!
//! # Example
//!
//! ```rust,no_run
//! use verilens::{Analyzer, DecisionMode, ScoringConfig};
//!
//! let analyzer = Analyzer::new(ScoringConfig::default())?;
//! let report = analyzer.analyze("Breaking: miracle cure exposed!", DecisionMode::Informational)?;
//! println!("{} ({})", report.risk_score, report.risk_band);
//! # Ok::<(), verilens::VerilensError>(())
//! ```

pub mod actions;
pub mod classifier;
pub mod confidence;
pub mod config;
pub mod error;
pub mod explain;
pub mod lexicon;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod scoring;
pub mod segment;
pub mod sentiment;
pub mod verification;
pub mod virality;

pub use actions::recommend_action;
pub use confidence::confidence_band;
pub use config::{ScoringConfig, VerilensConfig};
pub use error::{Result, VerilensError};
pub use explain::{explain, Signal};
pub use models::{
    AnalysisReport, Claim, ConfidenceBand, ConfidenceLevel, DecisionMode, RiskBand, RiskScore,
    Tone, VerificationTriage, Virality,
};
pub use pipeline::Analyzer;
pub use verification::fact_check_assist;
pub use virality::estimate_virality;

/// Shown under every rendered report
pub const DISCLAIMER: &str = "VeriLens is an explainable, human-in-the-loop decision support system. \
It provides early misinformation risk signals and does not determine absolute truth.";
