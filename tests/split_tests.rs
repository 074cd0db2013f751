//! Integration tests for split and join commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::chips_cmd;

fn split_lines(raw: &str, extra: &[&str]) -> Vec<String> {
    let temp = TempDir::new().unwrap();
    let output = chips_cmd()
        .current_dir(temp.path())
        .arg("split")
        .arg(raw)
        .args(extra)
        .output()
        .unwrap();

    assert!(output.status.success());
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn test_split_simple() {
    assert_eq!(split_lines("a,b,c", &[]), vec!["a", "b", "c"]);
}

#[test]
fn test_split_keeps_quotes_around_protected_comma() {
    assert_eq!(
        split_lines(r#"a,"b,c",d"#, &[]),
        vec!["a", r#""b,c""#, "d"]
    );
}

#[test]
fn test_split_doubled_and_spaced_commas() {
    assert_eq!(split_lines("a,,b", &[]), vec!["a", "b"]);
    assert_eq!(split_lines("a, ,b", &[]), vec!["a", "", "b"]);
    assert_eq!(split_lines("a, ,b", &["--drop-empty"]), vec!["a", "b"]);
}

#[test]
fn test_split_unclosed_quote() {
    assert_eq!(
        split_lines(r#"a,"unclosed, tail"#, &[]),
        vec!["a", r#""unclosed, tail"#]
    );
}

#[test]
fn test_split_reads_stdin() {
    let temp = TempDir::new().unwrap();
    chips_cmd()
        .current_dir(temp.path())
        .arg("split")
        .write_stdin("x, y\n")
        .assert()
        .success()
        .stdout("x\ny\n");
}

#[test]
fn test_split_empty_input() {
    let temp = TempDir::new().unwrap();
    chips_cmd()
        .current_dir(temp.path())
        .arg("split")
        .arg("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found"));
}

#[test]
fn test_join_round_trips() {
    let temp = TempDir::new().unwrap();
    chips_cmd()
        .current_dir(temp.path())
        .arg("join")
        .arg("a")
        .arg(r#""b, c""#)
        .arg("d")
        .assert()
        .success()
        .stdout("a,\"b, c\",d\n");

    assert_eq!(
        split_lines(r#"a,"b, c",d"#, &[]),
        vec!["a", r#""b, c""#, "d"]
    );
}

#[test]
fn test_invalid_log_level() {
    let temp = TempDir::new().unwrap();
    chips_cmd()
        .current_dir(temp.path())
        .arg("--log-level")
        .arg("loud")
        .arg("split")
        .arg("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid levels"));
}

#[test]
fn test_missing_explicit_config() {
    let temp = TempDir::new().unwrap();
    chips_cmd()
        .current_dir(temp.path())
        .arg("--config")
        .arg("missing.toml")
        .arg("split")
        .arg("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_local_config_is_picked_up() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("chips.toml"), "log_level = \"nonsense\"").unwrap();

    chips_cmd()
        .current_dir(temp.path())
        .arg("split")
        .arg("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}
