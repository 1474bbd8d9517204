/// End-to-end tests for config file discovery and CLI option merging.
///
/// Each test runs the binary inside a fresh temporary directory so that
/// `depscore.config.yml` discovery is isolated.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Absolute path to a report fixture
fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

#[test]
fn test_discovered_config_sets_format() {
    let dir = TempDir::new().unwrap();
    write_config(&dir.path().join("depscore.config.yml"), "format: json\n");

    cargo_bin_cmd!("depscore")
        .current_dir(dir.path())
        .arg(fixture("hapi-report.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_cli_format_overrides_config() {
    let dir = TempDir::new().unwrap();
    write_config(&dir.path().join("depscore.config.yml"), "format: json\n");

    cargo_bin_cmd!("depscore")
        .current_dir(dir.path())
        .arg(fixture("hapi-report.json"))
        .args(["-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Package Score Report"));
}

#[test]
fn test_config_min_grade_gate() {
    let dir = TempDir::new().unwrap();
    write_config(&dir.path().join("depscore.config.yml"), "min_grade: A\n");

    cargo_bin_cmd!("depscore")
        .current_dir(dir.path())
        .arg(fixture("hapi-report.json"))
        .assert()
        .code(1);
}

#[test]
fn test_config_breakdown() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("depscore.config.yml"),
        "breakdown: true\nformat: markdown\n",
    );

    cargo_bin_cmd!("depscore")
        .current_dir(dir.path())
        .arg(fixture("hapi-report.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("### Score Explanation"))
        .stdout(predicate::str::contains("| **Total** | **62** |"));
}

#[test]
fn test_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("ci.yml");
    write_config(&config_path, "format: json\nmin_grade: c\n");

    cargo_bin_cmd!("depscore")
        .arg(fixture("low-grade-report.json"))
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"passed\": false"));
}

#[test]
fn test_explicit_config_missing_is_error() {
    cargo_bin_cmd!("depscore")
        .arg(fixture("hapi-report.json"))
        .args(["--config", "/nonexistent/depscore.yml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_unknown_config_fields_warn() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("depscore.config.yml"),
        "format: json\ncheck_cve: true\n",
    );

    cargo_bin_cmd!("depscore")
        .current_dir(dir.path())
        .arg(fixture("hapi-report.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Unknown config field 'check_cve' will be ignored",
        ));
}

#[test]
fn test_invalid_config_value_is_error() {
    let dir = TempDir::new().unwrap();
    write_config(&dir.path().join("depscore.config.yml"), "min_grade: Z\n");

    cargo_bin_cmd!("depscore")
        .current_dir(dir.path())
        .arg(fixture("hapi-report.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid grade"));
}
