use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("fatura")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn parse_missing_file_fails() {
    Command::cargo_bin("fatura")
        .unwrap()
        .args(["parse", "does-not-exist.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn parse_garbage_bytes_fails_with_render_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.pdf");
    std::fs::write(&path, b"not a pdf").unwrap();

    Command::cargo_bin("fatura")
        .unwrap()
        .arg("parse")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("render"));
}

#[test]
fn list_on_empty_store_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("invoices.json");

    Command::cargo_bin("fatura")
        .unwrap()
        .arg("list")
        .arg("--store")
        .arg(&store)
        .assert()
        .success()
        .stderr(predicate::str::contains("no invoices"));
}
