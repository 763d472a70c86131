//! Phase 3 tests: the `dsearch` binary end to end.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dsearch"))
        .args(args)
        .env_remove("RUST_LOG")
        .current_dir(dir)
        .output()
        .expect("run dsearch")
}

fn write_input(dir: &Path, name: &str, contents: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create input dir");
    }
    fs::write(path, contents).expect("write input");
}

#[test]
fn test_cli_default_input_path() {
    let dir = tempdir().expect("temp dir");
    write_input(dir.path(), "data/dataset/input.txt", "9 7 5 3 1\n5 6 1\n");

    let out = run_in(dir.path(), &[]);
    assert!(
        out.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout), "2 -1 4\n");
}

#[test]
fn test_cli_explicit_path() {
    let dir = tempdir().expect("temp dir");
    write_input(dir.path(), "in.txt", "10 10 10\n10 11\n");

    let out = run_in(dir.path(), &["in.txt"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let fields: Vec<&str> = stdout.trim_end().split(' ').collect();
    assert_eq!(fields.len(), 2);
    assert!(["0", "1", "2"].contains(&fields[0]));
    assert_eq!(fields[1], "-1");
}

#[test]
fn test_cli_json_output() {
    let dir = tempdir().expect("temp dir");
    write_input(dir.path(), "in.txt", "9 7 5 3 1\n5 6 1\n");

    let out = run_in(dir.path(), &["in.txt", "--format", "json"]);
    assert!(out.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    let indices: Vec<i64> = value["results"]
        .as_array()
        .expect("results array")
        .iter()
        .map(|r| r["index"].as_i64().expect("index"))
        .collect();
    assert_eq!(indices, vec![2, -1, 4]);
}

#[test]
fn test_cli_empty_queries_print_empty_line() {
    let dir = tempdir().expect("temp dir");
    write_input(dir.path(), "in.txt", "3 2 1\n\n");

    let out = run_in(dir.path(), &["in.txt"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "\n");
}

#[test]
fn test_cli_missing_input_exits_1() {
    let dir = tempdir().expect("temp dir");
    let out = run_in(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Error: IO error"));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_cli_malformed_input_exits_2() {
    let dir = tempdir().expect("temp dir");
    write_input(dir.path(), "bad.txt", "9 seven 5\n5\n");
    let out = run_in(dir.path(), &["bad.txt"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("seven"));

    write_input(dir.path(), "short.txt", "9 7 5\n");
    let out = run_in(dir.path(), &["short.txt"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_cli_warns_on_unsorted_sequence() {
    let dir = tempdir().expect("temp dir");
    write_input(dir.path(), "in.txt", "1 2 3\n9\n");

    let out = run_in(dir.path(), &["in.txt"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "-1\n");
    assert!(String::from_utf8_lossy(&out.stderr).contains("not in descending order"));
}

#[test]
fn test_cli_verbose_keeps_stdout_clean() {
    let dir = tempdir().expect("temp dir");
    write_input(dir.path(), "in.txt", "9 7 5 3 1\n5 6 1\n");

    let out = run_in(dir.path(), &["in.txt", "--verbose"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "2 -1 4\n");
    assert!(!out.stderr.is_empty());
}
