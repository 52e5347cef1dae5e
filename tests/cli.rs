//! End-to-end tests for the `cellmind` binary.
//!
//! Each test writes a snapshot into a temporary directory and runs the built
//! binary against it.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
    "width": 6,
    "height": 6,
    "entities": [
        {"x": 2, "y": 2, "type": "ROOT", "owner": 1, "organ_id": 1, "direction": "N", "parent_id": 0, "root_id": 1},
        {"x": 3, "y": 2, "type": "A", "owner": -1},
        {"x": 5, "y": 5, "type": "ROOT", "owner": 0, "organ_id": 2, "direction": "N", "parent_id": 0, "root_id": 2},
        {"x": 0, "y": 0, "type": "WALL", "owner": -1}
    ],
    "my_resources": [1, 0, 0, 0],
    "opp_resources": [0, 0, 0, 0],
    "required_actions": 1
}"#;

fn write_snapshot(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("turn.json");
    std::fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str], snapshot: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cellmind"))
        .args(args)
        .arg(snapshot)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_decide_prints_one_command() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(&dir, SNAPSHOT);

    let output = run(&["decide", "--seed", "1"], &snapshot);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "GROW 1 3 2 BASIC X\n");
}

#[test]
fn test_decide_json_includes_stats() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(&dir, SNAPSHOT);

    let output = run(&["decide", "--seed", "1", "--format", "json"], &snapshot);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["decisions"][0]["root_id"], 1);
    assert_eq!(value["decisions"][0]["command"], "GROW 1 3 2 BASIC X");
    assert!(value["stats"]["nodes"].as_u64().unwrap() > 0);
}

#[test]
fn test_actions_lists_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(&dir, SNAPSHOT);

    let output = run(&["actions", "--root", "1"], &snapshot);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.lines().any(|line| line == "GROW 1 3 2 BASIC X"));
    assert!(text.lines().any(|line| line == "WAIT"));
    assert_eq!(text.lines().count(), 5);

    let missing = run(&["actions", "--root", "2"], &snapshot);
    assert!(!missing.status.success());
}

#[test]
fn test_eval_json_total() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(&dir, SNAPSHOT);

    let output = run(&["eval", "--format", "json"], &snapshot);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    // Equal organ counts, one A of stock lead.
    assert_eq!(value["total"], 2);
}

#[test]
fn test_simulate_rejects_illegal_command() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(&dir, SNAPSHOT);

    let legal = Command::new(env!("CARGO_BIN_EXE_cellmind"))
        .args(["simulate"])
        .arg(&snapshot)
        .arg("GROW 1 3 2 BASIC X")
        .output()
        .unwrap();
    assert!(legal.status.success());
    assert!(stdout(&legal).contains("..RB.."));

    let illegal = Command::new(env!("CARGO_BIN_EXE_cellmind"))
        .args(["simulate"])
        .arg(&snapshot)
        .arg("GROW 1 3 2 TENTACLE E")
        .output()
        .unwrap();
    assert!(!illegal.status.success());
}

#[test]
fn test_validate_reports_bad_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(&dir, SNAPSHOT);
    assert!(run(&["validate"], &snapshot).status.success());

    let overlapping = SNAPSHOT.replace(r#""x": 0, "y": 0, "type": "WALL""#, r#""x": 3, "y": 2, "type": "WALL""#);
    let snapshot = write_snapshot(&dir, &overlapping);
    let output = run(&["validate"], &snapshot);
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("already occupied"));
}
