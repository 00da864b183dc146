//! CLI integration tests
//!
//! These tests verify that the binary works end to end with various options.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn cli() -> Command {
    Command::cargo_bin("unused-components").expect("binary should build")
}

fn sample_project(root: &Path) {
    write(root, "components/Foo.vue", "<template><div /></template>");
    write(root, "components/Bar.vue", "<template><div /></template>");
    write(root, "pages/index.vue", "<template><Bar /></template>");
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("unused-components"))
        .stdout(predicate::str::contains("--components"))
        .stdout(predicate::str::contains("--retain"));
}

#[test]
fn test_cli_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unused-components"));
}

#[test]
fn test_cli_report_exact_output() {
    let temp = tempdir().unwrap();
    sample_project(temp.path());

    cli()
        .arg(temp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(
            "Total: 2\nUsed: 1\nUnused: 1\n\n--- Unused Components ---\n[UNUSED] Foo.vue (Patterns: [Foo])\n",
        );
}

#[test]
fn test_cli_logs_go_to_stderr() {
    let temp = tempdir().unwrap();
    sample_project(temp.path());

    cli()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Total: 2\n"))
        .stderr(predicate::str::contains("Found 2 components"));
}

#[test]
fn test_cli_empty_directory() {
    let temp = tempdir().unwrap();

    cli()
        .arg(temp.path())
        .arg("-q")
        .assert()
        .success()
        .stdout("Total: 0\nUsed: 0\nUnused: 0\n\n--- Unused Components ---\n");
}

#[test]
fn test_cli_runs_are_identical() {
    let temp = tempdir().unwrap();
    sample_project(temp.path());
    write(temp.path(), "components/hotel/basic-info.vue", "<div />");
    write(temp.path(), "components/navbar/index.vue", "<nav />");

    let first = cli().arg(temp.path()).arg("-q").output().unwrap();
    let second = cli().arg(temp.path()).arg("-q").output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

// ============================================================================
// Option Tests
// ============================================================================

#[test]
fn test_cli_custom_directories() {
    let temp = tempdir().unwrap();
    write(temp.path(), "src/widgets/Clock.vue", "<time />");
    write(temp.path(), "src/views/Home.vue", "<Clock />");

    cli()
        .arg(temp.path())
        .args(["--components", "src/widgets", "--pages", "src/views", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 1\nUsed: 1\nUnused: 0\n"));
}

#[test]
fn test_cli_retain_flag() {
    let temp = tempdir().unwrap();
    sample_project(temp.path());

    cli()
        .arg(temp.path())
        .args(["--retain", "Foo", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unused: 0"))
        .stdout(predicate::str::contains("[UNUSED]").not());
}

#[test]
fn test_cli_json_format() {
    let temp = tempdir().unwrap();
    sample_project(temp.path());

    let output = cli()
        .arg(temp.path())
        .args(["--format", "json", "-q"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["unused"][0]["path"], "Foo.vue");
}

#[test]
fn test_cli_output_file() {
    let temp = tempdir().unwrap();
    sample_project(temp.path());
    let report_path = temp.path().join("report.txt");

    cli()
        .arg(temp.path())
        .arg("-q")
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let written = fs::read_to_string(&report_path).unwrap();
    assert!(written.contains("[UNUSED] Foo.vue (Patterns: [Foo])"));
}

#[test]
fn test_cli_config_file() {
    let temp = tempdir().unwrap();
    write(temp.path(), "ui/Badge.vue", "<span />");
    write(temp.path(), ".unused-components.yml", "components_dir: ui\n");

    cli()
        .arg(temp.path())
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("[UNUSED] Badge.vue (Patterns: [Badge])"));
}

#[test]
fn test_cli_bad_config_fails() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("broken.yml");
    fs::write(&config, "components_dir: [unterminated\n").unwrap();

    cli()
        .arg(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .failure();
}
