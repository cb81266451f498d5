#![forbid(unsafe_code)]
mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn cli(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("shiftplan-cli").unwrap();
    cmd.arg("--data-dir").arg(dir);
    cmd
}

#[test]
fn assign_reports_outcome_through_exit_code() {
    let dir = common::fixture();

    cli(dir.path())
        .args(["assign", "--employee", "E001", "--shift", "S1"])
        .assert()
        .success()
        .stdout("Shift Recorded\n");

    cli(dir.path())
        .args(["assign", "--employee", "E001", "--shift", "S1"])
        .assert()
        .code(2)
        .stdout("Assignment already exists\n");

    cli(dir.path())
        .args(["assign", "--employee", "E001", "--shift", "S2"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("exceed daily limit of 8 hours"));
}

#[test]
fn schedule_prints_csv() {
    let dir = common::fixture();
    for shift in ["A", "B", "C"] {
        cli(dir.path())
            .args(["assign", "--employee", "E002", "--shift", shift])
            .assert()
            .success();
    }

    cli(dir.path())
        .args(["schedule", "--employee", "E002"])
        .assert()
        .success()
        .stdout(
            "date,startTime,endTime\n\
             2024-02-01,08:00,09:30\n\
             2024-02-01,10:00,12:00\n\
             2024-02-02,09:00,12:00\n",
        );

    let out = dir.path().join("e002.csv");
    cli(dir.path())
        .args(["schedule", "--employee", "E002", "--out"])
        .arg(&out)
        .assert()
        .success();
    assert!(fs::read_to_string(out).unwrap().starts_with("date,startTime,endTime\n2024-02-01,08:00"));
}

#[test]
fn add_then_list_employees() {
    let dir = tempfile::tempdir().unwrap();

    cli(dir.path())
        .arg("employees")
        .assert()
        .success()
        .stdout("No employees found\n");

    cli(dir.path())
        .args(["add-employee", "--name", "Alice", "--phone", "555-0101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("E001"));

    let output = cli(dir.path()).arg("employees").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    insta::assert_snapshot!(stdout, @r"
    Employee ID  Name                   Phone
    ------------ ---------------------- ---------
    E001         Alice                  555-0101
    ");
}

#[test]
fn import_shifts_then_assign() {
    let dir = common::fixture();
    let csv = dir.path().join("extra.csv");
    fs::write(&csv, "shiftId,date,startTime,endTime\nX1,2024-06-01,09:00,17:00\n").unwrap();

    cli(dir.path())
        .args(["import-shifts", "--csv"])
        .arg(&csv)
        .assert()
        .success()
        .stdout("1 shift(s) imported\n");

    cli(dir.path())
        .args(["assign", "--employee", "E001", "--shift", "X1"])
        .assert()
        .success();
}

#[test]
fn menu_runs_actions_until_exit() {
    let dir = common::fixture();

    cli(dir.path())
        .arg("menu")
        .write_stdin("3\nE001\nC\n3\n\n\n4\nE001\n9\n5\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Shift Recorded")
                .and(predicate::str::contains("Employee ID and Shift ID required"))
                .and(predicate::str::contains("2024-02-01,08:00,09:30"))
                .and(predicate::str::contains("Invalid choice"))
                .and(predicate::str::ends_with("Goodbye!\n")),
        );
}

#[test]
fn menu_stops_at_end_of_input() {
    let dir = common::fixture();
    cli(dir.path()).arg("menu").write_stdin("1\n").assert().success().stdout(
        predicate::str::contains("Alice Martin").and(predicate::str::contains("Bob Chen")),
    );
}
