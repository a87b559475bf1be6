use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn script(home: &TempDir, input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("finance_tracker_cli")
        .unwrap()
        .env("FINANCE_TRACKER_CLI_SCRIPT", "1")
        .env("FINANCE_TRACKER_HOME", home.path())
        .env("NO_COLOR", "1")
        .write_stdin(input.to_string())
        .assert()
}

#[test]
fn script_mode_adds_and_charts_transactions() {
    let home = TempDir::new().unwrap();
    script(
        &home,
        "add 100 Salary 2024-12-05\n\
         add 50 Gift 2025-01-10\n\
         add -20 'Dinner out' 2024-12-20\n\
         list\n\
         chart\n\
         exit\n",
    )
    .success()
    .stdout(contains("Transaction added"))
    .stdout(contains("Dinner out"))
    .stdout(contains("Dec 2024"))
    .stdout(contains("$80.00"))
    .stdout(contains("Jan 2025"))
    .stdout(contains("$50.00"));
}

#[test]
fn empty_chart_reports_no_data() {
    let home = TempDir::new().unwrap();
    script(&home, "chart\n")
        .success()
        .stdout(contains("No data to display"));
}

#[test]
fn invalid_input_prints_field_errors_and_continues() {
    let home = TempDir::new().unwrap();
    script(&home, "add abc '' nope\nlist\n")
        .success()
        .stdout(contains("amount: Amount must be a valid number"))
        .stdout(contains("description: Description is required"))
        .stdout(contains("date: Invalid date format"))
        .stdout(contains("No transactions yet"));
}

#[test]
fn edit_and_delete_by_position() {
    let home = TempDir::new().unwrap();
    script(
        &home,
        "add 10 Lunch 2024-05-01\n\
         edit #1 --description Brunch\n\
         show #1\n\
         delete #1\n\
         list\n",
    )
    .success()
    .stdout(contains("updated"))
    .stdout(contains("description: Brunch"))
    .stdout(contains("deleted"))
    .stdout(contains("No transactions yet"));
}

#[test]
fn config_changes_are_persisted() {
    let home = TempDir::new().unwrap();
    script(&home, "config set currency_symbol EUR\n").success();
    script(&home, "add 5 Snack 2024-01-01\nchart\n")
        .success()
        .stdout(contains("EUR5.00"));
    assert!(home.path().join("config.json").exists());
}

#[test]
fn unknown_command_suggests_closest_match() {
    let home = TempDir::new().unwrap();
    script(&home, "chrat\n")
        .success()
        .stdout(contains("Unknown command `chrat`"))
        .stdout(contains("Suggestion: `chart`?"))
        .stdout(contains("ERROR").not());
}

#[test]
fn add_without_date_defaults_to_today() {
    let home = TempDir::new().unwrap();
    let today = finance_tracker::ledger::form::today();
    script(&home, "add 5 Snack\nlist\n")
        .success()
        .stdout(contains("Transaction added"))
        .stdout(contains(today));
}
