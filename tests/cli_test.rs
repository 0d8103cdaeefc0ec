//! CLI contract tests
//!
//! Runs the built binary from a scratch directory so no stray
//! `verilens.toml` is picked up.

use std::path::Path;
use std::process::{Command, Output};

const CLICKBAIT: &str = "Breaking: shocking miracle cure exposed by secret sources!!!";

fn verilens_bin() -> &'static str {
    env!("CARGO_BIN_EXE_verilens")
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(verilens_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("VERILENS_MODE")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run verilens")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn parse_json(output: &Output) -> serde_json::Value {
    serde_json::from_str(&stdout(output)).expect("Invalid JSON")
}

// ============================================================================
// analyze
// ============================================================================

#[test]
fn test_analyze_json_fields() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["analyze", CLICKBAIT, "--format", "json"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report = parse_json(&output);
    let score = report["risk_score"].as_u64().unwrap();
    assert!(score <= 100);
    assert_eq!(report["tone"], "Emotional");
    assert_eq!(report["virality"], "High");
    assert_eq!(report["confidence_label"], "High");
    assert_eq!(report["uncertainty_margin"], "±8%");
    assert_eq!(report["mode"], "Informational");
    assert_eq!(report["reasons"].as_array().unwrap().len(), 3);
    assert_eq!(report["claims"].as_array().unwrap().len(), 1);
    assert_eq!(
        report["verification_status"],
        "no supporting institutional references detected"
    );
}

#[test]
fn test_analyze_text_report_has_disclaimer() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["analyze", CLICKBAIT]);
    assert!(output.status.success());
    let text = console::strip_ansi_codes(&stdout(&output)).to_string();
    assert!(text.contains("RECOMMENDED ACTION"));
    assert!(text.contains("does not determine absolute truth"));
}

#[test]
fn test_analyze_high_stakes_mode() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(
        dir.path(),
        &["analyze", CLICKBAIT, "--mode", "high-stakes", "--format", "json"],
    );
    assert!(output.status.success());
    let report = parse_json(&output);
    assert_eq!(report["mode"], "High-Stakes");
    assert_eq!(report["actions"][0], "Delay publication until verification");
}

#[test]
fn test_blank_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["analyze", "   \n\t "]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Please enter some text"));
}

#[test]
fn test_unknown_mode_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["analyze", CLICKBAIT, "--mode", "bogus"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("bogus"));
}

#[test]
fn test_analyze_from_file_to_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("post.txt");
    let report_path = dir.path().join("report.md");
    std::fs::write(&input, CLICKBAIT).unwrap();

    let output = run_in(
        dir.path(),
        &[
            "analyze",
            "--file",
            input.to_str().unwrap(),
            "--format",
            "md",
            "--output",
            report_path.to_str().unwrap(),
        ],
    );
    assert!(output.status.success());
    let markdown = std::fs::read_to_string(&report_path).unwrap();
    assert!(markdown.starts_with('#'));
    assert!(markdown.contains("Informational"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_default_mode_is_used() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("verilens.toml"),
        "[defaults]\nmode = \"high-stakes\"\nformat = \"json\"\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &["analyze", CLICKBAIT]);
    assert!(output.status.success());
    assert_eq!(parse_json(&output)["mode"], "High-Stakes");

    // flag beats config
    let output = run_in(dir.path(), &["analyze", CLICKBAIT, "--mode", "informational"]);
    assert_eq!(parse_json(&output)["mode"], "Informational");
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[scoring]\nneutral_polarity_threshold = 7.0\n").unwrap();

    let output = run_in(
        dir.path(),
        &["analyze", CLICKBAIT, "--config", config.to_str().unwrap()],
    );
    assert!(!output.status.success());
}

#[test]
fn test_unknown_config_format_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[defaults]\nformat = \"sarif\"\n").unwrap();

    let output = run_in(
        dir.path(),
        &["analyze", CLICKBAIT, "--config", config.to_str().unwrap()],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("sarif"));
}

// ============================================================================
// batch / init
// ============================================================================

#[test]
fn test_batch_skips_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("posts.txt");
    std::fs::write(
        &input,
        format!("{CLICKBAIT}\n\n   \nThe Ministry of Health announced a new policy today.\n"),
    )
    .unwrap();

    let output = run_in(dir.path(), &["batch", "--file", input.to_str().unwrap()]);
    assert!(output.status.success());
    let reports = parse_json(&output);
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert!(reports[0]["risk_score"].as_u64().unwrap() > reports[1]["risk_score"].as_u64().unwrap());
}

#[test]
fn test_init_creates_config() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["init"]);
    assert!(output.status.success());

    let written = std::fs::read_to_string(dir.path().join("verilens.toml")).unwrap();
    assert!(written.contains("[scoring]"));

    // the example config is loadable as-is
    let output = run_in(dir.path(), &["analyze", CLICKBAIT, "--format", "json"]);
    assert!(output.status.success());
}
