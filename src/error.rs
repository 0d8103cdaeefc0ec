//! Error types for the scoring library

use thiserror::Error;

/// Errors that can occur while configuring or running an analysis
#[derive(Error, Debug)]
pub enum VerilensError {
    #[error("Input text is empty or whitespace-only")]
    InvalidInput,

    #[error("Unknown decision mode '{0}'. Valid modes: informational, high-stakes")]
    UnknownMode(String),

    #[error("Unknown format '{0}'. Valid formats: text, json, markdown")]
    UnknownFormat(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid training corpus: {0}")]
    InvalidCorpus(String),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VerilensError>;
