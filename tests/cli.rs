//! Command-line surface tests

use assert_cmd::Command;
use heatfile::test_utils::TestDir;
use predicates::prelude::*;

fn heatfile() -> Command {
    let mut cmd = Command::cargo_bin("heatfile").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_lists_options() {
    heatfile()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--path"))
        .stdout(predicate::str::contains("--search"))
        .stdout(predicate::str::contains("--color"));
}

#[test]
fn test_version() {
    heatfile()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_short_and_long_flags_agree() {
    let dir = TestDir::new();
    dir.add_file("root/x.md", "Heat");
    dir.add_file("root/y.md", "cold");
    let root = dir.path().join("root");

    let short = heatfile()
        .args(["-P", root.to_str().unwrap(), "-S", "heat"])
        .output()
        .unwrap();
    let long = heatfile()
        .args(["--path", root.to_str().unwrap(), "--search", "heat"])
        .output()
        .unwrap();

    assert!(short.status.success());
    assert_eq!(short.stdout, long.stdout);
    assert_eq!(
        String::from_utf8(short.stdout).unwrap(),
        "root/\n├── x.md (1)\n\n0 directories, 1 files\n"
    );
}

#[test]
fn test_missing_path_exit_code() {
    heatfile()
        .args(["--path", "/definitely/not/here"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Directory/File not found"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_color_mode_rejected() {
    heatfile().args(["--color", "sometimes"]).assert().failure();
}

#[test]
fn test_silent_log_level_keeps_stderr_clean() {
    let dir = TestDir::new();
    dir.add_file("root/a.txt", "a");

    heatfile()
        .current_dir(dir.path())
        .args(["-P", "root", "--log-level", "silent"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::ends_with("0 directories, 1 files\n"));
}
