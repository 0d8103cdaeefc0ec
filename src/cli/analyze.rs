//! Analyze and batch commands

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use verilens::config::{load_config, VerilensConfig};
use verilens::reporters::{self, OutputFormat};
use verilens::{Analyzer, DecisionMode};

pub(super) struct AnalyzeArgs {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub mode: Option<String>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
}

fn load(config_path: Option<&Path>) -> Result<VerilensConfig> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    load_config(config_path, &cwd).context("Failed to load configuration")
}

/// Flag > config default > informational
fn resolve_mode(flag: Option<&str>, config: &VerilensConfig) -> Result<DecisionMode> {
    match flag {
        Some(mode) => Ok(mode.parse()?),
        None => Ok(config.default_mode().unwrap_or_default()),
    }
}

fn resolve_format(flag: Option<&str>, config: &VerilensConfig) -> Result<OutputFormat> {
    match flag.or(config.defaults.format.as_deref()) {
        Some(format) => Ok(format.parse()?),
        None => Ok(OutputFormat::Text),
    }
}

fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}

fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote report to {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

pub(super) fn run(args: AnalyzeArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load(config_path)?;
    let mode = resolve_mode(args.mode.as_deref(), &config)?;
    let format = resolve_format(args.format.as_deref(), &config)?;

    let text = read_input(args.text, args.file.as_deref())?;
    if text.trim().is_empty() {
        anyhow::bail!("Please enter some text. Input is empty or whitespace-only.");
    }

    let analyzer = Analyzer::new(config.scoring).context("Failed to initialize analyzer")?;
    let report = analyzer.analyze(&text, mode)?;
    let rendered = reporters::render(&report, format)?;
    write_output(&rendered, args.output.as_deref())
}

pub(super) fn run_batch(
    file: &Path,
    mode: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load(config_path)?;
    let mode = resolve_mode(mode.as_deref(), &config)?;

    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let texts: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    if texts.is_empty() {
        anyhow::bail!("{} contains no text to analyze", file.display());
    }

    let analyzer = Analyzer::new(config.scoring).context("Failed to initialize analyzer")?;
    let reports = analyzer
        .analyze_batch(&texts, mode)
        .into_iter()
        .collect::<verilens::Result<Vec<_>>>()?;

    tracing::info!("Analyzed {} texts", reports.len());
    let rendered = reporters::render_json_batch(&reports)?;
    write_output(&rendered, output.as_deref())
}
