//! Integration tests for the CLI surface.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn clean_dest() -> Command {
    Command::cargo_bin("clean-dest").unwrap()
}

#[test]
fn help_lists_the_option_surface() {
    clean_dest()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--base-pattern"))
        .stdout(predicate::str::contains("--file-map"))
        .stdout(predicate::str::contains("--permanent"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn version_flag_works() {
    clean_dest()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clean-dest"));
}

#[test]
fn quiet_suppresses_the_report() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("src")).unwrap();
    fs::create_dir_all(tmp.path().join("dest")).unwrap();

    clean_dest()
        .current_dir(tmp.path())
        .args(["src", "dest", "--permanent", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_config_file_fails() {
    clean_dest()
        .args(["--config", "no-such-config.toml", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-config.toml"));
}

#[test]
fn missing_file_map_fails() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("src")).unwrap();
    fs::create_dir_all(tmp.path().join("dest")).unwrap();

    clean_dest()
        .current_dir(tmp.path())
        .args(["src", "dest", "--dry-run", "--file-map", "no-such-map.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-map.toml"));
}
