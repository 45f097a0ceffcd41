//! Integration tests for arbor


use assert_cmd::Command;
use harness::{run_arbor, script};
use predicates::prelude::*;

#[test]
fn test_single_directory_with_file() {
    let input = script(&["DIR 1 a", "FILE 1 rwx user grp 4.0 b.txt"]);
    let (stdout, _stderr, success) = run_arbor(&input, &["--color", "never"]);
    assert!(success, "arbor should succeed");
    assert_eq!(stdout, "total: 4KB\n.\n└── a\n    └── b.txt (4KB)\n");
}

#[test]
fn test_directory_then_file_under_root() {
    // The directory's child sits under a continuation bar because a sibling
    // of the directory still follows; the final file gets the elbow.
    let input = script(&[
        "DIR 1 docs",
        "FILE 1 rwx user grp 1.0 inner.txt",
        "FILE 0 rwx user grp 2.0 outer.txt",
    ]);
    let (stdout, _stderr, success) = run_arbor(&input, &["--color", "never"]);
    assert!(success);
    assert_eq!(
        stdout,
        "total: 3KB\n.\n├── docs\n│   └── inner.txt (1KB)\n└── outer.txt (2KB)\n"
    );
}

#[test]
fn test_total_line_comes_first() {
    let input = script(&["FILE 0 rwx user grp 2.5 a.txt"]);
    let (stdout, _stderr, success) = run_arbor(&input, &["--color", "never"]);
    assert!(success);
    let first = stdout.lines().next().expect("output should not be empty");
    assert_eq!(first, "total: 2.5KB");
}

#[test]
fn test_empty_script() {
    let (stdout, _stderr, success) = run_arbor("0\n", &["--color", "never"]);
    assert!(success);
    assert_eq!(stdout, "total: 0KB\n.\n");
}

#[test]
fn test_fractional_sizes_trim_trailing_zeros() {
    let input = script(&[
        "FILE 0 rwx user grp 4.50 a.txt",
        "FILE 0 rwx user grp 4.20 b.txt",
    ]);
    let (stdout, _stderr, success) = run_arbor(&input, &["--color", "never"]);
    assert!(success);
    assert!(stdout.contains("a.txt (4.5KB)"), "got: {}", stdout);
    assert!(stdout.contains("b.txt (4.2KB)"), "got: {}", stdout);
    assert!(stdout.contains("total: 8.7KB"), "got: {}", stdout);
}

#[test]
fn test_sibling_order_is_command_order() {
    let input = script(&[
        "FILE 0 rwx user grp 1.0 z.txt",
        "DIR 1 alpha",
        "FILE 0 rwx user grp 1.0 m.txt",
    ]);
    let (stdout, _stderr, success) = run_arbor(&input, &["--color", "never"]);
    assert!(success);
    assert_eq!(
        stdout,
        "total: 2KB\n.\n├── z.txt (1KB)\n├── alpha\n└── m.txt (1KB)\n"
    );
}

#[test]
fn test_no_total_flag() {
    let input = script(&["DIR 1 a"]);
    let (stdout, _stderr, success) = run_arbor(&input, &["--color", "never", "--no-total"]);
    assert!(success);
    assert_eq!(stdout, ".\n└── a\n");
}

#[test]
fn test_ignore_pattern_affects_listing_and_total() {
    let input = script(&[
        "DIR 1 src",
        "FILE 1 rwx user grp 2.0 main.txt",
        "FILE 1 rwx user grp 10.0 debug.log",
    ]);
    let (stdout, _stderr, success) =
        run_arbor(&input, &["--color", "never", "-I", "*.log"]);
    assert!(success);
    assert!(!stdout.contains("debug.log"), "got: {}", stdout);
    assert!(stdout.contains("total: 2KB"), "got: {}", stdout);
}

#[test]
fn test_ignore_directory_drops_subtree() {
    let input = script(&[
        "DIR 1 build",
        "FILE 1 rwx user grp 5.0 out.bin",
        "FILE 0 rwx user grp 1.0 keep.txt",
    ]);
    let (stdout, _stderr, success) = run_arbor(&input, &["--color", "never", "-I", "build"]);
    assert!(success);
    assert_eq!(stdout, "total: 1KB\n.\n└── keep.txt (1KB)\n");
}

#[test]
fn test_json_output() {
    let input = script(&["DIR 1 a", "FILE 1 rwx user grp 4.5 b.txt"]);
    let (stdout, _stderr, success) = run_arbor(&input, &["--json"]);
    assert!(success);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["total_kb"], 4.5);
    assert_eq!(value["tree"]["type"], "dir");
    assert_eq!(value["tree"]["name"], ".");
    let file = &value["tree"]["children"][0]["children"][0];
    assert_eq!(file["type"], "file");
    assert_eq!(file["name"], "b");
    assert_eq!(file["extension"], "txt");
    assert_eq!(file["permissions"], "rwx");
    assert_eq!(file["owner"], "user");
    assert_eq!(file["group"], "grp");
}

#[test]
fn test_script_from_file_path() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{}", script(&["DIR 1 a"])).expect("write script");

    Command::cargo_bin("arbor")
        .unwrap()
        .arg(file.path())
        .args(["--color", "never"])
        .assert()
        .success()
        .stdout(predicate::eq("total: 0KB\n.\n└── a\n"));
}

#[test]
fn test_missing_script_file() {
    Command::cargo_bin("arbor")
        .unwrap()
        .arg("no/such/script.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn test_unknown_command_fails_without_output() {
    let input = "1\nLINK 1 2 x\n";
    Command::cargo_bin("arbor")
        .unwrap()
        .write_stdin(input)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown command"));
}

#[test]
fn test_unresolved_parent_fails_without_output() {
    let input = script(&["DIR 2 9 orphan"]);
    Command::cargo_bin("arbor")
        .unwrap()
        .write_stdin(input)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("parent directory 9"));
}

#[test]
fn test_duplicate_identifier_fails() {
    let input = script(&["DIR 1 a", "DIR 1 b"]);
    Command::cargo_bin("arbor")
        .unwrap()
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already in use"));
}

#[test]
fn test_truncated_script_fails() {
    Command::cargo_bin("arbor")
        .unwrap()
        .write_stdin("3\nDIR 1 a\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("declares 3 commands"));
}
