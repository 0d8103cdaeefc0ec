//! Configuration file support
//!
//! Loads settings from `verilens.toml`.
//!
//! # Configuration Format
//!
//! ```toml
//! # verilens.toml
//!
//! [scoring]
//! neutral_polarity_threshold = 0.2
//! neutral_score_ceiling = 50
//! neutral_penalty = 30
//! neutral_floor = 5
//! authority_penalty = 20
//! emotional_polarity_threshold = 0.4
//!
//! [defaults]
//! mode = "informational"
//! format = "text"
//! ```

use crate::error::{Result, VerilensError};
use crate::models::DecisionMode;
use crate::reporters::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name searched for in the working directory
pub const CONFIG_FILE_NAME: &str = "verilens.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VerilensConfig {
    /// Heuristic adjustments applied to the classifier score
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Parameters of the heuristic score adjustments and tone labelling
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoringConfig {
    /// Polarity magnitude below which text counts as neutral (default: 0.2)
    #[serde(default = "default_neutral_polarity_threshold")]
    pub neutral_polarity_threshold: f64,

    /// Neutral dampening only applies below this score (default: 50)
    #[serde(default = "default_neutral_score_ceiling")]
    pub neutral_score_ceiling: i64,

    /// Points removed from neutral, low-scoring text (default: 30)
    #[serde(default = "default_neutral_penalty")]
    pub neutral_penalty: i64,

    /// Neutral dampening never takes the score below this (default: 5)
    #[serde(default = "default_neutral_floor")]
    pub neutral_floor: i64,

    /// Points removed when an authoritative entity is named (default: 20)
    #[serde(default = "default_authority_penalty")]
    pub authority_penalty: i64,

    /// Polarity magnitude above which tone is emotional (default: 0.4)
    #[serde(default = "default_emotional_polarity_threshold")]
    pub emotional_polarity_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            neutral_polarity_threshold: default_neutral_polarity_threshold(),
            neutral_score_ceiling: default_neutral_score_ceiling(),
            neutral_penalty: default_neutral_penalty(),
            neutral_floor: default_neutral_floor(),
            authority_penalty: default_authority_penalty(),
            emotional_polarity_threshold: default_emotional_polarity_threshold(),
        }
    }
}

fn default_neutral_polarity_threshold() -> f64 {
    0.2
}
fn default_neutral_score_ceiling() -> i64 {
    50
}
fn default_neutral_penalty() -> i64 {
    30
}
fn default_neutral_floor() -> i64 {
    5
}
fn default_authority_penalty() -> i64 {
    20
}
fn default_emotional_polarity_threshold() -> f64 {
    0.4
}

impl ScoringConfig {
    /// Check every threshold and penalty is in range
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("neutral_polarity_threshold", self.neutral_polarity_threshold),
            ("emotional_polarity_threshold", self.emotional_polarity_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(VerilensError::InvalidConfig(format!(
                    "{name} must be between 0.0 and 1.0, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("neutral_score_ceiling", self.neutral_score_ceiling),
            ("neutral_penalty", self.neutral_penalty),
            ("neutral_floor", self.neutral_floor),
            ("authority_penalty", self.authority_penalty),
        ] {
            if !(0..=100).contains(&value) {
                return Err(VerilensError::InvalidConfig(format!(
                    "{name} must be between 0 and 100, got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// Default CLI flags that can be set in the config file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliDefaults {
    /// Default decision mode (informational, high-stakes)
    #[serde(default)]
    pub mode: Option<String>,

    /// Default output format (text, json, markdown)
    #[serde(default)]
    pub format: Option<String>,
}

impl VerilensConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: VerilensConfig = toml::from_str(content)?;
        config.scoring.validate()?;
        if let Some(mode) = &config.defaults.mode {
            mode.parse::<DecisionMode>()?;
        }
        if let Some(format) = &config.defaults.format {
            format.parse::<OutputFormat>()?;
        }
        Ok(config)
    }

    /// Load a config file, failing on missing or invalid files
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Default mode from the config file, if set and valid
    pub fn default_mode(&self) -> Option<DecisionMode> {
        self.defaults.mode.as_deref().and_then(|m| m.parse().ok())
    }

    /// Per-user config location (~/.config/verilens/config.toml)
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("verilens").join("config.toml"))
    }
}

/// Load configuration.
///
/// Searches in this order:
/// 1. `explicit` path (errors are returned, not skipped)
/// 2. `verilens.toml` in `dir`
/// 3. the per-user config file
///
/// Returns default configuration if no config file is found.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<VerilensConfig> {
    if let Some(path) = explicit {
        let config = VerilensConfig::load_file(path)?;
        debug!("Loaded config from {}", path.display());
        return Ok(config);
    }

    let candidates = std::iter::once(dir.join(CONFIG_FILE_NAME))
        .chain(VerilensConfig::user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match VerilensConfig::load_file(&path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    debug!("No config found, using defaults");
    Ok(VerilensConfig::default())
}

/// Annotated example written by `verilens init`
pub const EXAMPLE_CONFIG: &str = r#"# VeriLens Configuration

[scoring]
# Text whose sentiment magnitude is below this counts as neutral
neutral_polarity_threshold = 0.2
# Neutral dampening applies only to scores below this ceiling
neutral_score_ceiling = 50
# Points removed from neutral low-scoring text (never below neutral_floor)
neutral_penalty = 30
neutral_floor = 5
# Points removed when a government body, court, ministry etc. is named
authority_penalty = 20
# Sentiment magnitude above which tone is labelled Emotional
emotional_polarity_threshold = 0.4

[defaults]
# Decision mode: informational, high-stakes
mode = "informational"
# Output format: text, json, markdown
format = "text"
"#;
