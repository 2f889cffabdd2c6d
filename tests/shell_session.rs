//! End-to-end menu sessions driven through the real binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wallet_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wallet").unwrap();
    cmd.arg("--file")
        .arg(temp_dir.path().join("transactions.txt"));
    cmd
}

#[test]
fn first_run_reports_missing_file_and_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();

    wallet_cmd(&temp_dir)
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A new file will be created."))
        .stdout(predicate::str::contains("Personal Finance Wallet"));
}

#[test]
fn added_records_survive_a_restart() {
    let temp_dir = TempDir::new().unwrap();

    wallet_cmd(&temp_dir)
        .write_stdin("2\n2024-01-01\nIncome\n1000\nSalary\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Record added."));

    let contents =
        std::fs::read_to_string(temp_dir.path().join("transactions.txt")).unwrap();
    assert_eq!(contents, "2024-01-01, Income, 1000, Salary\n");

    // A second run sees the saved record and computes the balance from it.
    wallet_cmd(&temp_dir)
        .write_stdin("5\n1\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0. 2024-01-01, Income, 1000, Salary"))
        .stdout(predicate::str::contains("Balance: 1000"));
}

#[test]
fn delete_reindexes_the_listing() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("transactions.txt"),
        "2024-01-01, Income, 1000, Salary\n2024-01-02, Expense, 200, Groceries\n",
    )
    .unwrap();

    wallet_cmd(&temp_dir)
        .write_stdin("4\n0\n5\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Record '2024-01-01, Income, 1000, Salary' deleted.",
        ))
        .stdout(predicate::str::contains(
            "0. 2024-01-02, Expense, 200, Groceries",
        ));

    let contents =
        std::fs::read_to_string(temp_dir.path().join("transactions.txt")).unwrap();
    assert_eq!(contents, "2024-01-02, Expense, 200, Groceries\n");
}

#[test]
fn invalid_menu_choice_redisplays_the_menu() {
    let temp_dir = TempDir::new().unwrap();

    wallet_cmd(&temp_dir)
        .write_stdin("99\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Try again."));
}

#[test]
fn search_session_finds_by_category_text() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("transactions.txt"),
        "2024-01-01, Income, 1000, Salary\n2024-01-02, Expense, 200, Groceries\n",
    )
    .unwrap();

    wallet_cmd(&temp_dir)
        .write_stdin("6\nexpense\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Matching records:"))
        .stdout(predicate::str::contains("2024-01-02, Expense, 200, Groceries"));
}

#[test]
fn malformed_ledger_file_fails_with_context() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("transactions.txt"), "garbage line\n").unwrap();

    wallet_cmd(&temp_dir)
        .write_stdin("7\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed record"));
}

#[test]
fn mutations_append_to_the_audit_log() {
    let temp_dir = TempDir::new().unwrap();

    wallet_cmd(&temp_dir)
        .write_stdin("2\n2024-01-01\nIncome\n1000\nSalary\n7\n")
        .assert()
        .success();

    let audit = std::fs::read_to_string(temp_dir.path().join("transactions.audit.log")).unwrap();
    assert_eq!(audit.lines().count(), 1);
    assert!(audit.contains("\"operation\":\"create\""));
}
