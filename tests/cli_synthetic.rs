//! Fixture-driven CLI scenarios.
//!
//! Each case under `tests/fixtures/synthetic/<case>/` provides:
//! - `input/`        working tree (scripts, chips.toml) copied to a temp directory
//! - `scenario.toml` commands to run there, with exit code and output checks
//! - `expected/`     the tree the temp directory must match afterwards

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct Scenario {
    #[serde(rename = "command")]
    commands: Vec<CommandSpec>,
}

#[derive(Debug, Deserialize)]
struct CommandSpec {
    args: Vec<String>,
    #[serde(default)]
    expect_exit: i32,
    #[serde(default)]
    stdout_contains: Vec<String>,
    #[serde(default)]
    stdout_not_contains: Vec<String>,
    #[serde(default)]
    stderr_contains: Vec<String>,
}

#[test]
fn test_synthetic_fixtures() {
    let root = Path::new("tests").join("fixtures").join("synthetic");
    let mut cases: Vec<PathBuf> = fs::read_dir(&root)
        .unwrap_or_else(|e| panic!("Fixture root {} unreadable: {}", root.display(), e))
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    cases.sort();
    assert!(!cases.is_empty(), "No synthetic cases under {}", root.display());

    for case in cases {
        run_case(&case);
    }
}

fn run_case(case_dir: &Path) {
    let name = case_dir.file_name().unwrap().to_string_lossy().to_string();
    let scenario_text = fs::read_to_string(case_dir.join("scenario.toml"))
        .unwrap_or_else(|e| panic!("Case '{}' has no readable scenario.toml: {}", name, e));
    let scenario: Scenario = toml::from_str(&scenario_text)
        .unwrap_or_else(|e| panic!("Case '{}' has invalid scenario.toml: {}", name, e));

    let temp = tempfile::TempDir::new().unwrap();
    for (rel, contents) in read_tree(&case_dir.join("input")) {
        let dest = temp.path().join(rel);
        fs::create_dir_all(dest.parent().unwrap()).unwrap();
        fs::write(dest, contents).unwrap();
    }

    for (idx, command) in scenario.commands.iter().enumerate() {
        let output = run_chips(temp.path(), &command.args);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let label = format!("Case '{}', command #{} {:?}", name, idx + 1, command.args);

        assert_eq!(
            output.status.code(),
            Some(command.expect_exit),
            "{} exit code mismatch.\nstdout:\n{}\nstderr:\n{}",
            label,
            stdout,
            stderr
        );

        for needle in &command.stdout_contains {
            assert!(
                stdout.contains(needle.as_str()),
                "{} expected stdout to contain {:?}.\nstdout:\n{}",
                label,
                needle,
                stdout
            );
        }
        for needle in &command.stdout_not_contains {
            assert!(
                !stdout.contains(needle.as_str()),
                "{} expected stdout to NOT contain {:?}.\nstdout:\n{}",
                label,
                needle,
                stdout
            );
        }
        for needle in &command.stderr_contains {
            assert!(
                stderr.contains(needle.as_str()),
                "{} expected stderr to contain {:?}.\nstderr:\n{}",
                label,
                needle,
                stderr
            );
        }
    }

    let expected = read_tree(&case_dir.join("expected"));
    let actual = read_tree(temp.path());
    assert_eq!(
        expected.keys().collect::<Vec<_>>(),
        actual.keys().collect::<Vec<_>>(),
        "Case '{}' produced a different set of files",
        name
    );
    for (rel, contents) in &expected {
        assert_eq!(
            contents.replace("\r\n", "\n"),
            actual[rel].replace("\r\n", "\n"),
            "Case '{}' file mismatch at {}",
            name,
            rel.display()
        );
    }
}

fn run_chips(cwd: &Path, args: &[String]) -> Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_chips"))
        .current_dir(cwd)
        .env_remove("CHIPS_CONFIG")
        .env_remove("CHIPS_LOG")
        .stdin(Stdio::null())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run chips with {:?}: {}", args, e))
}

/// Every file under `root`, keyed by relative path
fn read_tree(root: &Path) -> BTreeMap<PathBuf, String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            (rel, fs::read_to_string(e.path()).unwrap())
        })
        .collect()
}
