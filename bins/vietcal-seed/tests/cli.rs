//! Offline checks of the seed CLI surface: argument parsing and the
//! exit-code contract for initialization failures.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_seeding() {
    Command::cargo_bin("vietcal-seed")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("foods collection"));
}

#[test]
fn invalid_store_url_fails_before_any_work() {
    Command::cargo_bin("vietcal-seed")
        .unwrap()
        .args(["--store-url", "not-a-url"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("initialization error"));
}
