//! End-to-end CLI tests for the mangafetch binary.
//!
//! These run the real binary but only against roots that trigger no network
//! traffic (empty, declined, or unreadable).

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help_shows_usage() {
    Command::cargo_bin("mangafetch")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Library root to scan"));
}

#[test]
fn test_cli_version_shows_crate_version() {
    Command::cargo_bin("mangafetch")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_empty_root_runs_to_completion() {
    let tmp = tempfile::TempDir::new().unwrap();

    Command::cargo_bin("mangafetch")
        .unwrap()
        .arg(tmp.path())
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUMMARY"))
        .stdout(predicate::str::contains("Total directories: 0"));
}

#[test]
fn test_cli_declined_confirmation_aborts_cleanly() {
    let tmp = tempfile::TempDir::new().unwrap();

    Command::cargo_bin("mangafetch")
        .unwrap()
        .arg(tmp.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Do you want to proceed?"))
        .stdout(predicate::str::contains("Aborted."));
}

#[test]
fn test_cli_eof_on_confirmation_aborts_cleanly() {
    let tmp = tempfile::TempDir::new().unwrap();

    Command::cargo_bin("mangafetch")
        .unwrap()
        .arg(tmp.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));
}

#[test]
fn test_cli_unreadable_root_is_fatal() {
    Command::cargo_bin("mangafetch")
        .unwrap()
        .arg("/definitely/not/a/real/root")
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("library walk could not start"));
}

#[test]
fn test_cli_banner_names_root_and_source() {
    let tmp = tempfile::TempDir::new().unwrap();

    Command::cargo_bin("mangafetch")
        .unwrap()
        .arg(tmp.path())
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Manga Metadata Fetcher for Mihon"))
        .stdout(predicate::str::contains("Jikan API (MyAnimeList)"));
}
