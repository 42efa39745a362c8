//! End-to-end tests for the flatcat binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn create_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::create_dir_all(root.join("notes")).unwrap();
    fs::write(root.join("README.md"), "# Demo\n").unwrap();
    fs::write(root.join("src/main.rs"), "fn main() {}").unwrap();
    fs::write(root.join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
    fs::write(root.join("notes/todo.txt"), "buy milk\n").unwrap();
    fs::write(root.join("logo.png"), [0x89, b'P', b'N', b'G', 0, 0, 0, 13]).unwrap();
    dir
}

fn flatcat() -> Command {
    Command::cargo_bin("flatcat").unwrap()
}

#[test]
fn test_missing_root_is_usage_error() {
    flatcat()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_stdout_output_and_stats_on_stderr() {
    let dir = create_tree();
    flatcat()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            "<file path=README.md>\n# Demo\n</file>\n\n<file path=notes/todo.txt>\nbuy milk\n</file>\n\n<file path=src/main.rs>\nfn main() {}\n</file>\n\n",
        )
        .stderr(predicate::str::contains("5 total"))
        .stderr(predicate::str::contains("1 ignored"))
        .stderr(predicate::str::contains("1 binary"));
}

#[test]
fn test_ignore_flag_both_forms() {
    let dir = create_tree();
    flatcat()
        .arg(dir.path())
        .arg("--ignore=notes,README.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("notes/todo.txt").not())
        .stdout(predicate::str::contains("README.md").not())
        .stdout(predicate::str::contains("src/main.rs"));
    flatcat()
        .arg(dir.path())
        .args(["--ignore", "src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/main.rs").not())
        .stdout(predicate::str::contains("README.md"));
}

#[test]
fn test_max_file_bytes() {
    let dir = create_tree();
    flatcat()
        .arg(dir.path())
        .args(["--max-file-bytes", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/main.rs").not())
        .stdout(predicate::str::contains("README.md"))
        .stderr(predicate::str::contains("2 too large"));
}

#[test]
fn test_non_numeric_max_file_bytes_fails_fast() {
    let dir = create_tree();
    flatcat()
        .arg(dir.path())
        .arg("--max-file-bytes=lots")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_output_file_excludes_itself() {
    let dir = create_tree();
    for _ in 0..2 {
        flatcat()
            .current_dir(dir.path())
            .args([".", "--output=flat.txt"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Wrote 3 files to"));
    }
    let written = fs::read_to_string(dir.path().join("flat.txt")).unwrap();
    assert!(written.starts_with("<file path=README.md>\n"));
    assert!(!written.contains("path=flat.txt"));
}

#[test]
fn test_extra_positionals_are_ignored() {
    let dir = create_tree();
    flatcat()
        .arg(dir.path())
        .arg("unused")
        .assert()
        .success()
        .stdout(predicate::str::contains("<file path=README.md>"));
}

#[test]
fn test_json_stats_and_quiet() {
    let dir = create_tree();
    flatcat()
        .arg(dir.path())
        .arg("--stats=json")
        .assert()
        .success()
        .stderr(predicate::str::contains("\"total\":5"));
    flatcat()
        .arg(dir.path())
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_unreadable_root_exits_with_error() {
    let dir = TempDir::new().unwrap();
    flatcat()
        .arg(dir.path().join("nope"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Cannot read root directory"));
}

#[test]
fn test_output_file_excluded_with_parent_dir_root() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(dir.path().join("a.txt"), "alpha\n").unwrap();
    for _ in 0..2 {
        flatcat()
            .current_dir(&sub)
            .args(["..", "--output=out.txt"])
            .assert()
            .success();
    }
    let written = fs::read_to_string(sub.join("out.txt")).unwrap();
    assert_eq!(written, "<file path=a.txt>\nalpha\n</file>\n\n");
}

#[test]
fn test_output_write_error_is_fatal() {
    let dir = create_tree();
    let target = dir.path().join("missing_dir").join("out.txt");
    flatcat()
        .arg(dir.path())
        .arg(format!("--output={}", target.display()))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: I/O error on"));
    assert!(!target.exists());
}
