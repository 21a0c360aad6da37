//! End-to-end CLI tests. None of these require a tesseract install: an
//! unreadable image degrades to an empty record, which is exactly the
//! behavior under test.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn batch_fails_on_missing_folder() {
    Command::cargo_bin("chitbook")
        .unwrap()
        .args(["batch", "definitely-missing-folder"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn batch_reports_empty_folder_without_writing_a_ledger() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("chitbook")
        .unwrap()
        .arg("batch")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No images found"));
}

#[test]
fn batch_writes_ledger_with_totals_row() {
    let dir = tempfile::tempdir().unwrap();
    // Not a decodable image: OCR degrades to empty text, but the record is
    // still emitted and the date comes from the file name.
    std::fs::write(dir.path().join("2025-01-04.jpg"), b"not a real image").unwrap();
    let out = dir.path().join("ledger.csv");

    Command::cargo_bin("chitbook")
        .unwrap()
        .arg("batch")
        .arg(dir.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with(
        "Transaction Date,Amount Transferred,Transaction ID,Chit Amount,Source File"
    ));
    assert!(csv.contains("04-Jan-25,,,40000,2025-01-04.jpg"));
    assert!(csv.contains("TOTAL"));
    assert!(csv.contains("40,000"));
}

#[test]
fn batch_honors_chit_amount_override() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("scan.png"), b"junk").unwrap();
    let out = dir.path().join("ledger.csv");

    Command::cargo_bin("chitbook")
        .unwrap()
        .arg("batch")
        .arg(dir.path())
        .arg("--output")
        .arg(&out)
        .args(["--chit-amount", "15000"])
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.contains(",,,15000,scan.png"));
    assert!(csv.contains("15,000"));
}

#[test]
fn process_fails_on_missing_input() {
    Command::cargo_bin("chitbook")
        .unwrap()
        .args(["process", "no-such-image.jpg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_show_prints_defaults() {
    Command::cargo_bin("chitbook")
        .unwrap()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chit_amount"));
}
