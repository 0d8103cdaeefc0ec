//! Configuration module for VeriLens
//!
//! This module handles:
//! - Scoring adjustment parameters
//! - CLI defaults
//! - Config file discovery (verilens.toml, per-user config)

mod project_config;

pub use project_config::{
    load_config, CliDefaults, ScoringConfig, VerilensConfig, CONFIG_FILE_NAME, EXAMPLE_CONFIG,
};
