/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const HAPI_REPORT: &str = "tests/fixtures/hapi-report.json";
const LEGACY_REPORT: &str = "tests/fixtures/legacy-keys-report.json";
const NEGATIVE_REPORT: &str = "tests/fixtures/negative-count-report.json";
const LOW_GRADE_REPORT: &str = "tests/fixtures/low-grade-report.json";

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("depscore").arg(HAPI_REPORT).assert().code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("depscore").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("depscore").arg("--version").assert().code(0);
    }

    /// Exit code 1: grade worse than --min-grade
    #[test]
    fn test_exit_code_grade_below_minimum() {
        cargo_bin_cmd!("depscore")
            .args([LOW_GRADE_REPORT, "--min-grade", "D"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("worse than the minimum grade D"));
    }

    /// Exit code 0: grade equal to --min-grade passes
    #[test]
    fn test_exit_code_grade_at_minimum() {
        cargo_bin_cmd!("depscore")
            .args([HAPI_REPORT, "--min-grade", "B"])
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("depscore")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: No report and no --package
    #[test]
    fn test_exit_code_missing_source() {
        cargo_bin_cmd!("depscore").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("depscore")
            .args([HAPI_REPORT, "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid grade value
    #[test]
    fn test_exit_code_invalid_grade() {
        cargo_bin_cmd!("depscore")
            .args([HAPI_REPORT, "--min-grade", "F"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - report file does not exist
    #[test]
    fn test_exit_code_nonexistent_report() {
        cargo_bin_cmd!("depscore")
            .arg("/nonexistent/report.json")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read file"));
    }

    /// Exit code 3: Application error - negative vulnerability count
    #[test]
    fn test_exit_code_negative_count() {
        cargo_bin_cmd!("depscore")
            .arg(NEGATIVE_REPORT)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid score input"))
            .stderr(predicate::str::contains("directVulnsHigh"));
    }

    /// Exit code 3: Application error - malformed JSON
    #[test]
    fn test_exit_code_malformed_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{\"package\": ").unwrap();

        cargo_bin_cmd!("depscore")
            .arg(&path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse package report"));
    }

    /// Exit code 3: Application error - scoring API unreachable
    #[test]
    fn test_exit_code_api_unreachable() {
        cargo_bin_cmd!("depscore")
            .args([
                "--package",
                "@hapi/hapi",
                "--package-version",
                "19.1.1",
                "--api-url",
                "http://127.0.0.1:1",
            ])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to reach scoring API"))
            .stderr(predicate::str::contains("package_name=%40hapi%2Fhapi"));
    }
}

mod output_tests {
    use super::*;

    #[test]
    fn test_markdown_is_default_format() {
        cargo_bin_cmd!("depscore")
            .arg(HAPI_REPORT)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("# Package Score Report"))
            .stdout(predicate::str::contains(
                "- **Score:** 62 (grade **B**, `score-b`)",
            ))
            .stdout(predicate::str::contains("## Direct Dependencies"))
            .stdout(predicate::str::contains("## Grade Distribution"))
            .stdout(predicate::str::contains("### Score Explanation").not());
    }

    #[test]
    fn test_json_output() {
        let output = cargo_bin_cmd!("depscore")
            .args([HAPI_REPORT, "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["package"]["name"], "@hapi/hapi");
        assert_eq!(json["package"]["totalScore"], 62);
        assert_eq!(json["package"]["grade"], "B");
        assert_eq!(json["package"]["gradeClass"], "score-b");
        assert_eq!(json["dependencies"][0]["grade"], "A");
        assert_eq!(json["dependencies"][1]["totalScore"], 58);
        assert!(json["package"].get("breakdown").is_none());
    }

    #[test]
    fn test_breakdown_flag() {
        let output = cargo_bin_cmd!("depscore")
            .args([HAPI_REPORT, "-f", "json", "--breakdown"])
            .output()
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let breakdown = json["package"]["breakdown"].as_array().unwrap();
        let last = breakdown.last().unwrap();
        assert_eq!(last["label"], "Total");
        assert_eq!(last["delta"], 62);
    }

    #[test]
    fn test_legacy_keys_produce_same_score() {
        cargo_bin_cmd!("depscore")
            .args([LEGACY_REPORT, "-f", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"totalScore\": 62"));
    }

    #[test]
    fn test_aggregate_flag() {
        cargo_bin_cmd!("depscore")
            .args([HAPI_REPORT, "-f", "json", "--aggregate"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"totalScore\": 72"))
            .stdout(predicate::str::contains("\"allDependencyCount\": 3"));
    }

    #[test]
    fn test_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("score.md");

        cargo_bin_cmd!("depscore")
            .arg(HAPI_REPORT)
            .arg("-o")
            .arg(&output_path)
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Output complete"));

        let written = fs::read_to_string(&output_path).unwrap();
        assert!(written.contains("| 9.0.4 | 58 | C | 0 | ❌ fail |"));
    }

    #[test]
    fn test_grade_summary_on_stderr() {
        cargo_bin_cmd!("depscore")
            .arg(HAPI_REPORT)
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "🏁 @hapi/hapi@19.1.1: score 62, grade B",
            ));
    }
}
