//! End-to-end tests for the compiled binary, text and JSON modes only (the
//! TUI needs a terminal).

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn write_csv(dir: &tempfile::TempDir, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = File::create(&path).unwrap();
    for row in rows {
        writeln!(f, "{row}").unwrap();
    }
    path
}

fn lockhist() -> Command {
    Command::cargo_bin("lockhist").unwrap()
}

#[test]
fn text_mode_summarizes_both_series() {
    let dir = tempfile::tempdir().unwrap();
    let mutex = write_csv(&dir, "mutex_ns.csv", &["100", "150", "120"]);
    let sem = write_csv(&dir, "sem_ns.csv", &["200", "210"]);

    lockhist()
        .args([
            "--mutex-csv",
            mutex.to_str().unwrap(),
            "--sem-csv",
            sem.to_str().unwrap(),
            "--text",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mutex:"))
        .stdout(predicate::str::contains("Semáforo:"))
        .stdout(predicate::str::contains("100 edges spanning 100 .. 210 ns"))
        .stdout(predicate::str::contains("Error:").not());
}

#[test]
fn missing_mutex_file_prints_notice_and_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let sem = write_csv(&dir, "sem_ns.csv", &["200", "210"]);
    let missing = dir.path().join("mutex_ns.csv");

    lockhist()
        .args([
            "--mutex-csv",
            missing.to_str().unwrap(),
            "--sem-csv",
            sem.to_str().unwrap(),
            "--text",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "Error: No se encontró el archivo {}.\n",
            missing.display()
        )));
}

#[test]
fn missing_sem_file_is_named_in_the_notice() {
    let dir = tempfile::tempdir().unwrap();
    let mutex = write_csv(&dir, "mutex_ns.csv", &["100"]);
    let missing = dir.path().join("sem_ns.csv");

    lockhist()
        .args([
            "--mutex-csv",
            mutex.to_str().unwrap(),
            "--sem-csv",
            missing.to_str().unwrap(),
            "--text",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "No se encontró el archivo {}.",
            missing.display()
        )));
}

#[test]
fn first_missing_file_wins_when_both_are_absent() {
    let dir = tempfile::tempdir().unwrap();
    let mutex = dir.path().join("mutex_ns.csv");
    let sem = dir.path().join("sem_ns.csv");

    lockhist()
        .args([
            "--mutex-csv",
            mutex.to_str().unwrap(),
            "--sem-csv",
            sem.to_str().unwrap(),
            "--text",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "No se encontró el archivo {}.",
            mutex.display()
        )))
        .stdout(predicate::str::contains(sem.display().to_string()).not());
}

#[test]
fn json_mode_emits_the_full_report() {
    let dir = tempfile::tempdir().unwrap();
    let mutex = write_csv(&dir, "mutex_ns.csv", &["100", "150", "120"]);
    let sem = write_csv(&dir, "sem_ns.csv", &["200", "210"]);

    let output = lockhist()
        .args([
            "--mutex-csv",
            mutex.to_str().unwrap(),
            "--sem-csv",
            sem.to_str().unwrap(),
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let edges = report["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 100);
    assert_eq!(edges[0], 100.0);
    assert_eq!(edges[99], 210.0);
    assert_eq!(report["scaler"]["min"], 100.0);
    assert_eq!(report["scaler"]["max"], 210.0);
    assert_eq!(report["mutex"]["normalized"][0], 0.0);
    assert_eq!(report["sem"]["normalized"][1], 1.0);
    assert_eq!(report["mutex"]["summary"]["count"], 3);
    assert_eq!(report["sem"]["summary"]["count"], 2);
}

#[test]
fn bins_flag_controls_the_edge_count() {
    let dir = tempfile::tempdir().unwrap();
    let mutex = write_csv(&dir, "mutex_ns.csv", &["10", "20", "30"]);
    let sem = write_csv(&dir, "sem_ns.csv", &["5", "15", "25"]);

    let output = lockhist()
        .args([
            "--mutex-csv",
            mutex.to_str().unwrap(),
            "--sem-csv",
            sem.to_str().unwrap(),
            "--bins",
            "5",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let edges = report["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 5);
    assert_eq!(edges[0], 5.0);
    assert_eq!(edges[4], 30.0);
}

#[test]
fn non_numeric_rows_are_an_unrecoverable_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mutex = write_csv(&dir, "mutex_ns.csv", &["100", "garbage", "120"]);
    let sem = write_csv(&dir, "sem_ns.csv", &["200"]);

    lockhist()
        .args([
            "--mutex-csv",
            mutex.to_str().unwrap(),
            "--sem-csv",
            sem.to_str().unwrap(),
            "--text",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid sample"));
}

#[test]
fn empty_inputs_are_an_unrecoverable_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mutex = write_csv(&dir, "mutex_ns.csv", &[]);
    let sem = write_csv(&dir, "sem_ns.csv", &[]);

    lockhist()
        .args([
            "--mutex-csv",
            mutex.to_str().unwrap(),
            "--sem-csv",
            sem.to_str().unwrap(),
            "--text",
        ])
        .assert()
        .failure();
}
