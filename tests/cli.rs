#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("shiftgrid-cli")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn generate_writes_a_full_month() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("schedule.json");

    Command::cargo_bin("shiftgrid-cli")
        .unwrap()
        .args(["generate", "--seed", "7", "--out-json"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-07-01"));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 31);
}

#[test]
fn generate_then_show_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let saved = dir.path().join("schedule.json");

    Command::cargo_bin("shiftgrid-cli")
        .unwrap()
        .args(["generate", "--seed", "3", "--save"])
        .arg(&saved)
        .assert()
        .success();

    Command::cargo_bin("shiftgrid-cli")
        .unwrap()
        .args(["show", "--schedule"])
        .arg(&saved)
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-07-31"));
}

#[test]
fn invalid_requests_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("requests.csv");
    std::fs::write(&csv, "employee,kind,date\nx,off,not-a-date\n").unwrap();

    Command::cargo_bin("shiftgrid-cli")
        .unwrap()
        .args(["generate", "--requests"])
        .arg(&csv)
        .assert()
        .failure();
}
