use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("aspen-play")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("examples"));
}

#[test]
fn test_run_help_shows_endpoint_flag() {
    cargo_bin_cmd!("aspen-play")
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("FILE"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("aspen-play")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
