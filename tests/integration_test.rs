//! Integration tests for the featopts binary and library surface.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use clap::Command;
use featopts::{Error, FeatureOptions, ServerConfig, ServerOption};
use std::io::Write;
use std::process::Output;
use test_case::test_case;

fn run_binary(config: &str, args: &[&str]) -> Output {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{config}").unwrap();

    std::process::Command::new(env!("CARGO_BIN_EXE_featopts"))
        .arg("--config")
        .arg(file.path())
        .args(["--log-format", "json", "--output", "json"])
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should run")
}

fn resolved(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_error_types() {
    let err = Error::InvalidInput("bad toml".to_string());
    let display = format!("{err}");
    assert!(display.contains("invalid input"));
    assert!(display.contains("bad toml"));

    let err = Error::OperationFailed {
        operation: "read".to_string(),
        cause: "file not found".to_string(),
    };
    let display = format!("{err}");
    assert!(display.contains("read"));
    assert!(display.contains("file not found"));
}

#[test_case(&["--metrics=false", "--profiling=true"], false, true ; "metrics off profiling on")]
#[test_case(&["--metrics", "--profiling=F"], true, false ; "bare flag and short false")]
#[test_case(&["--metrics=0", "--profiling=1"], false, true ; "numeric spellings")]
#[test_case(&[], true, true ; "defaults")]
fn test_library_flag_parsing(args: &[&str], metrics: bool, profiling: bool) {
    let mut options = FeatureOptions::new();
    let matches = options
        .add_flags(Command::new("server"))
        .try_get_matches_from(std::iter::once("server").chain(args.iter().copied()))
        .unwrap();
    options.read_flags(&matches);

    assert_eq!(options.enable_metrics, metrics);
    assert_eq!(options.enable_profiling, profiling);
}

#[test]
fn test_flags_override_config_file() {
    let output = run_binary(
        "[features]\nmetrics = true\nwatermarks = true\nindex = false\n",
        &["--metrics=false", "--contention-profiling"],
    );
    let config = resolved(&output);

    assert_eq!(config["enable_metrics"], false);
    assert_eq!(config["enable_contention_profiling"], true);
    assert_eq!(config["enable_watermarks"], true);
    assert_eq!(config["enable_index"], false);
    assert_eq!(config["enable_profiling"], true);
}

#[test]
fn test_empty_config_uses_defaults() {
    let output = run_binary("", &[]);
    let config = resolved(&output);
    let defaults = serde_json::to_value(ServerConfig::default()).unwrap();
    assert_eq!(config, defaults);
}

#[test]
fn test_deprecated_swagger_flag_warns() {
    let output = run_binary("", &["--enable-swagger-ui=true"]);
    let config = resolved(&output);
    let defaults = serde_json::to_value(ServerConfig::default()).unwrap();
    assert_eq!(config, defaults);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(
        "Flag --enable-swagger-ui has been deprecated, swagger 1.2 support has been removed"
    ));
}

#[test]
fn test_deprecation_warning_survives_quiet_log_level() {
    let file = tempfile::NamedTempFile::new().unwrap();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_featopts"))
        .arg("--config")
        .arg(file.path())
        .args(["--log-format", "json", "--enable-swagger-ui"])
        .args(["--metrics", "--metrics=0"])
        .env("RUST_LOG", "error")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("enable_metrics = false"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Flag --enable-swagger-ui has been deprecated"));
}

#[test]
fn test_invalid_bool_rejected() {
    let output = run_binary("", &["--watermarks=maybe"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid boolean value 'maybe'"));
}

#[test]
fn test_malformed_config_fails() {
    let output = run_binary("[features]\nmetrics = \"sure\"\n", &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load configuration"));
}

#[test]
fn test_text_output() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[features]\nprofiling = false\n").unwrap();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_featopts"))
        .arg("-c")
        .arg(file.path())
        .arg("--watermarks")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("enable_profiling = false"));
    assert!(stdout.contains("enable_watermarks = true"));
}

#[test]
fn test_help_hides_deprecated_flag() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_featopts"))
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--metrics"));
    assert!(stdout.contains("--watermarks"));
    assert!(!stdout.contains("--enable-swagger-ui"));
}
