//! CLI command definitions and handlers

mod analyze;
mod init;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// VeriLens - explainable early misinformation-risk detection
///
/// Decision support only. It does not determine absolute truth.
#[derive(Parser, Debug)]
#[command(name = "verilens")]
#[command(
    version,
    about = "Explainable early misinformation-risk scoring for short texts",
    after_help = "\
Examples:
  verilens analyze \"Breaking: miracle cure exposed!\"     Analyze a text argument
  verilens analyze --file post.txt --mode high-stakes   High-stakes (journalism / policy) context
  echo \"some text\" | verilens analyze --format json     Read from stdin, JSON output
  verilens batch --file posts.txt                       One text per line, JSON array
  verilens init                                         Write an example verilens.toml"
)]
pub struct Cli {
    /// Config file (default: ./verilens.toml, then the per-user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one text
    Analyze {
        /// Text to analyze (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file
        #[arg(long, short = 'f', conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Decision mode: informational, high-stakes
        #[arg(long, short = 'm', env = "VERILENS_MODE")]
        mode: Option<String>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Write output to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Analyze every non-blank line of a file and print a JSON array
    Batch {
        /// File with one text per line
        #[arg(long, short = 'f')]
        file: PathBuf,

        /// Decision mode: informational, high-stakes
        #[arg(long, short = 'm', env = "VERILENS_MODE")]
        mode: Option<String>,

        /// Write output to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Write an example verilens.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            text,
            file,
            mode,
            format,
            output,
        } => analyze::run(
            analyze::AnalyzeArgs {
                text,
                file,
                mode,
                format,
                output,
            },
            cli.config.as_deref(),
        ),
        Commands::Batch { file, mode, output } => {
            analyze::run_batch(&file, mode, output, cli.config.as_deref())
        }
        Commands::Init { force } => init::run(&std::env::current_dir()?, force),
    }
}
