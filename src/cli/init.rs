//! Init command - write an example configuration file

use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use verilens::config::{CONFIG_FILE_NAME, EXAMPLE_CONFIG};

pub(super) fn run(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        println!(
            "{} Config already exists at {} (use --force to overwrite)",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    Ok(())
}
