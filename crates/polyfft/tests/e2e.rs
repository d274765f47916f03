//! End-to-end CLI integration tests.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn polyfft() -> Command {
    let mut cmd = Command::cargo_bin("polyfft").expect("binary not found");
    cmd.env_remove("POLYFFT_LOG").env_remove("POLYFFT_TEXT_FILE");
    cmd
}

#[test]
fn help_flag() {
    polyfft()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("multiply"))
        .stdout(predicate::str::contains("search"));
}

#[test]
fn version_flag() {
    polyfft()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("polyfft"));
}

#[test]
fn multiply_quiet() {
    polyfft()
        .args(["multiply", "1,2,3", "3,2,1", "-q"])
        .assert()
        .success()
        .stdout("3 + 8x + 14x^2 + 8x^3 + 3x^4\n");
}

#[test]
fn multiply_negative_coefficients() {
    polyfft()
        .args(["-q", "multiply", "-4,3", "1,2"])
        .assert()
        .success()
        .stdout("-4 + -5x + 6x^2\n");
}

#[test]
fn multiply_verbose_reports_operation() {
    polyfft()
        .args(["-v", "multiply", "1,2", "1,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation: multiply"))
        .stdout(predicate::str::contains("Result: 1 + 4x + 4x^2"));
}

#[test]
fn multiply_rejects_bad_coefficients() {
    polyfft()
        .args(["multiply", "1,two", "3"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid coefficient list"));
}

#[test]
fn pow_quiet() {
    polyfft()
        .args(["-q", "pow", "1,1", "4"])
        .assert()
        .success()
        .stdout("1 + 4x + 6x^2 + 4x^3 + x^4\n");
}

#[test]
fn pow_zero_is_one() {
    polyfft()
        .args(["-q", "pow", "5,7,9", "0"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn pow_json() {
    let output = polyfft()
        .args(["--json", "pow", "1,2", "2"])
        .output()
        .expect("run polyfft");
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["operation"], "pow");
    assert_eq!(report["coefficients"], serde_json::json!([1, 4, 4]));
    assert_eq!(report["polynomial"], "1 + 4x + 4x^2");
}

#[test]
fn transform_fast() {
    polyfft()
        .args(["-q", "transform", "1,2,3,4"])
        .assert()
        .success()
        .stdout(
            "10.000000+0.000000i\n\
             -2.000000-2.000000i\n\
             -2.000000+0.000000i\n\
             -2.000000+2.000000i\n",
        );
}

#[test]
fn transform_naive_accepts_any_length() {
    polyfft()
        .args(["-q", "transform", "--naive", "1,1,1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("3.000000+0.000000i\n"));
}

#[test]
fn transform_inverse() {
    polyfft()
        .args(["-q", "transform", "--inverse", "4,0"])
        .assert()
        .success()
        .stdout("2.000000+0.000000i\n2.000000+0.000000i\n");
}

#[test]
fn transform_fast_rejects_non_power_of_two() {
    polyfft()
        .args(["transform", "1,2,3"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("power of two"));
}

#[test]
fn search_exact() {
    polyfft()
        .args(["-q", "search", "--text", "aaaa", "a"])
        .assert()
        .success()
        .stdout("0 1 2 3\n");
}

#[test]
fn search_wildcard() {
    polyfft()
        .args(["-q", "search", "--text", "aaaa", "--wildcard", "a?"])
        .assert()
        .success()
        .stdout("0 1 2\n");
}

#[test]
fn search_custom_wildcard() {
    polyfft()
        .args([
            "-q",
            "search",
            "--text",
            "cat cot cut",
            "-w",
            "--wildcard-char",
            "*",
            "c*t",
        ])
        .assert()
        .success()
        .stdout("0 4 8\n");
}

#[test]
fn search_several_patterns_with_both_algorithms() {
    polyfft()
        .args([
            "-q",
            "search",
            "--text",
            "the cat sat on the mat with the hat",
            "--algo",
            "both",
            "the",
            "at",
        ])
        .assert()
        .success()
        .stdout("the: 0 15 28\nat: 5 9 20 33\n");
}

#[test]
fn search_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "hey jude, don't make it bad").unwrap();
    polyfft()
        .args(["-q", "search", "--file"])
        .arg(file.path())
        .args(["--algo", "naive", "jude"])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn search_json() {
    let output = polyfft()
        .args(["--json", "search", "--text", "abab", "ab", "b"])
        .output()
        .expect("run polyfft");
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["algorithm"], "fft");
    assert_eq!(report["text_len"], 4);
    assert_eq!(report["matches"][0]["positions"], serde_json::json!([0, 2]));
    assert_eq!(report["matches"][1]["positions"], serde_json::json!([1, 3]));
}

#[test]
fn search_without_text_fails() {
    polyfft()
        .args(["search", "a"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("no text to search"));
}

#[test]
fn search_missing_file_is_generic_error() {
    polyfft()
        .args(["search", "--file", "/nonexistent/polyfft/input.txt", "a"])
        .assert()
        .code(1);
}

#[test]
fn invalid_algo() {
    polyfft()
        .args(["search", "--text", "abc", "--algo", "quantum", "a"])
        .assert()
        .failure();
}

#[test]
fn verbose_logs_to_stderr() {
    polyfft()
        .args(["-v", "search", "--text", "abc", "b", "c"])
        .assert()
        .success()
        .stderr(predicate::str::contains("multi-pattern search"));
}
