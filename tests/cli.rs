//! End-to-end CLI tests for the settings commands.
//!
//! Each test points HOME at its own temp directory so settings never leak
//! between tests or into the real user configuration.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn repset(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("repset").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn settings_show_defaults_when_never_saved() {
    let home = TempDir::new().unwrap();

    repset(&home)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Training Settings"))
        .stdout(predicate::str::contains("Exercise:   0 seconds"));
}

#[test]
fn settings_set_round_trips_through_the_store() {
    let home = TempDir::new().unwrap();

    repset(&home)
        .args([
            "settings",
            "set",
            "--exercise-seconds",
            "30",
            "--break-seconds",
            "10",
            "--sets",
            "3",
            "--exercises",
            "Push-ups,Squats",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved."));

    let output = repset(&home)
        .args(["settings", "show", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["seconds_per_exercise"], 30);
    assert_eq!(parsed["break_seconds"], 10);
    assert_eq!(parsed["sets_number"], 3);
    assert_eq!(parsed["exercises_number"], 2);
    assert_eq!(parsed["exercises"][0], "Push-ups");
    assert_eq!(parsed["exercises"][1], "Squats");
}

#[test]
fn settings_set_pads_exercise_list_to_count() {
    let home = TempDir::new().unwrap();

    let output = repset(&home)
        .args([
            "settings",
            "set",
            "--exercises",
            "A,B",
            "--exercises-number",
            "3",
            "--output",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["exercises_number"], 3);
    assert_eq!(parsed["exercises"][2], "");
}

#[test]
fn settings_set_keeps_unrelated_fields() {
    let home = TempDir::new().unwrap();

    repset(&home)
        .args(["settings", "set", "--exercise-seconds", "45"])
        .assert()
        .success();

    let output = repset(&home)
        .args(["settings", "set", "--break-seconds", "15", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["seconds_per_exercise"], 45);
    assert_eq!(parsed["break_seconds"], 15);
}

#[test]
fn settings_reset_restores_defaults() {
    let home = TempDir::new().unwrap();

    repset(&home)
        .args(["settings", "set", "--exercise-seconds", "30"])
        .assert()
        .success();

    repset(&home)
        .args(["settings", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reset"));

    let output = repset(&home)
        .args(["settings", "show", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["seconds_per_exercise"], 0);
    assert_eq!(parsed["exercises"], Value::Array(vec![]));
}

#[test]
fn completions_emit_script_for_bash() {
    let home = TempDir::new().unwrap();

    repset(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repset"));
}
