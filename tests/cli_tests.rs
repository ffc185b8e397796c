//! Integration tests for the `yamlpick` binary.
//!
//! These run the real binary through `assert_cmd`, feeding documents over
//! stdin or from temp files, and check stdout, stderr, and exit codes.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DOC: &str = "a:\n  - 1\n  - 2\nb: 3\nk: first\nk: last\nnone:\n";

/// Helper: a yamlpick command that ignores the user's config file.
fn yamlpick(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("yamlpick").unwrap();
    cmd.arg("--config").arg(dir.path().join("config.toml"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn query_from_stdin() {
    let dir = TempDir::new().unwrap();
    yamlpick(&dir)
        .args(["-", ".a[1]"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("\"2\"\n");
}

#[test]
fn raw_output_strips_quotes() {
    let dir = TempDir::new().unwrap();
    yamlpick(&dir)
        .args(["-", ".b", "--output", "raw"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn query_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.yaml");
    fs::write(&path, DOC).unwrap();

    yamlpick(&dir)
        .arg(&path)
        .arg(".a")
        .assert()
        .success()
        .stdout("[\"1\", \"2\", ]\n");
}

#[test]
fn whole_tree_dump() {
    let dir = TempDir::new().unwrap();
    yamlpick(&dir)
        .write_stdin("x: [1, 2]")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsed structure as:"))
        .stdout(predicate::str::contains(r#"{"x": ["1", "2", ], }"#));
}

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();
    let output = yamlpick(&dir)
        .args(["-", ".a", "--output", "json"])
        .write_stdin(DOC)
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, serde_json::json!(["1", "2"]));
}

#[test]
fn duplicate_policy_flag() {
    let dir = TempDir::new().unwrap();
    yamlpick(&dir)
        .args(["-", ".k", "--policy", "last", "--output", "raw"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("last\n");

    yamlpick(&dir)
        .args(["-", ".k", "--policy", "error"])
        .write_stdin(DOC)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("duplicate matching keys"));
}

#[test]
fn policy_from_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "duplicate_keys = \"last\"\noutput = \"raw\"\n").unwrap();

    yamlpick(&dir)
        .args(["-", ".k"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("last\n");
}

#[test]
fn absent_value_prints_null() {
    let dir = TempDir::new().unwrap();
    yamlpick(&dir)
        .args(["-", ".none"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("(null)\n");
}

#[test]
fn missing_key_fails() {
    let dir = TempDir::new().unwrap();
    yamlpick(&dir)
        .args(["-", ".c"])
        .write_stdin(DOC)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no key 'c' in dict"));
}

#[test]
fn invalid_query_fails() {
    let dir = TempDir::new().unwrap();
    yamlpick(&dir)
        .args(["-", ".a[]"])
        .write_stdin(DOC)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid subsequence []"));
}

#[test]
fn quiet_hides_warnings() {
    let dir = TempDir::new().unwrap();
    yamlpick(&dir)
        .args(["-", ".c", "--quiet"])
        .write_stdin(DOC)
        .assert()
        .code(1)
        .stderr("");
}

#[test]
fn broken_document_exits_with_two() {
    let dir = TempDir::new().unwrap();
    yamlpick(&dir)
        .args(["-", ".a"])
        .write_stdin("a: \"open")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("broken document"));
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();
    yamlpick(&dir)
        .arg(dir.path().join("nope.yaml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn deeply_nested_document_is_rejected() {
    let dir = TempDir::new().unwrap();
    let yaml = format!("{}x", "- ".repeat(100_000));
    yamlpick(&dir)
        .args(["-", "[0]"])
        .write_stdin(yaml)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nesting deeper than 512 levels"));
}
