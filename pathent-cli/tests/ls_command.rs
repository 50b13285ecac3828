//! Integration tests for the `ls` command.

mod common;

use common::{sorted_names, TestEnv};
use predicates::prelude::*;

#[test]
fn test_ls_lists_direct_children() {
    let env = TestEnv::new();
    env.create_file("a.txt");
    env.create_file("sub/deep.txt");

    let stdout = env.run(&["ls"]);
    assert_eq!(sorted_names(&stdout), vec!["a.txt", "sub"]);
}

#[test]
fn test_ls_explicit_directory() {
    let env = TestEnv::new();
    env.create_file("sub/one.md");
    env.create_file("sub/two.md");

    let stdout = env.run(&["ls", "sub"]);
    assert_eq!(sorted_names(&stdout), vec!["one.md", "two.md"]);
}

#[test]
fn test_ls_empty_directory_prints_nothing() {
    let env = TestEnv::new();
    env.create_dir("empty");
    env.command()
        .args(["ls", "empty"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_ls_on_file_is_not_a_directory() {
    let env = TestEnv::new();
    env.create_file("plain.txt");

    env.command()
        .args(["ls", "plain.txt"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_ls_on_missing_directory() {
    let env = TestEnv::new();
    env.command().args(["ls", "missing"]).assert().failure().code(2);
}

#[test]
fn test_ls_json() {
    let env = TestEnv::new();
    env.create_file("a.txt");

    let stdout = env.run(&["--format", "json", "ls"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].as_str().unwrap().ends_with("a.txt"));
}
