use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

/// Runs the shell in script mode with colors off and an isolated config dir.
fn script(input: &str) -> assert_cmd::assert::Assert {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "locale": "en-US", "ui_color_enabled": false }"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("finance_core_cli").unwrap();
    cmd.env("FINANCE_CORE_CLI_SCRIPT", "1")
        .env("FINANCE_CORE_CONFIG_DIR", dir.path())
        .env("RUST_LOG", "off")
        .write_stdin(input.to_string())
        .assert()
}

#[test]
fn summary_reports_seeded_balance() {
    script("summary\nexit\n")
        .success()
        .stdout(contains("=== Summary ==="))
        .stdout(contains("Total balance : R$ 3,528.75"));
}

#[test]
fn overdraft_is_refused() {
    script("transaction add expense 100000 Groceries 2024-06-01 \"big cart\"\nsummary\n")
        .success()
        .stdout(contains("ERROR: Insufficient balance"))
        .stdout(contains("Total balance : R$ 3,528.75"));
}

#[test]
fn income_then_list_shows_new_row() {
    script("transaction add income 250 Bonus 2030-01-01 Quarterly bonus\ntransaction list\n")
        .success()
        .stdout(contains("OK: Transaction added: Quarterly bonus (R$ 250.00)"))
        .stdout(predicate::str::is_match(r"1\. 2030-01-01\s+Income\s+Quarterly bonus").unwrap());
}

#[test]
fn category_removal_warns_about_cascade() {
    script("category remove 8\n")
        .success()
        .stdout(contains("also deletes 1 linked transaction(s)"))
        .stdout(contains("Category `Groceries` removed (1 transaction(s) deleted)."));
}

#[test]
fn missing_fields_are_listed() {
    script("transaction add expense 0 Nowhere 2024-06-01\n")
        .success()
        .stdout(contains("Please fill in the required field(s): amount, description, category."));
}

#[test]
fn unknown_command_gets_suggestion() {
    script("sumary\n")
        .success()
        .stdout(contains("Unknown command `sumary`"))
        .stdout(contains("Suggestion: `summary`?"));
}

#[test]
fn reversed_custom_period_is_rejected() {
    script("period custom 2024-06-05 2024-06-01\n")
        .success()
        .stdout(contains("start date 2024-06-05 is after end date 2024-06-01"));
}

#[test]
fn export_prints_json() {
    script("export\n")
        .success()
        .stdout(contains("\"transactions\""))
        .stdout(contains("\"type\": \"EXPENSE\""));
}

#[test]
fn config_set_switches_format_and_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "ui_color_enabled": false }"#).unwrap();

    Command::cargo_bin("finance_core_cli")
        .unwrap()
        .env("FINANCE_CORE_CLI_SCRIPT", "1")
        .env("FINANCE_CORE_CONFIG_DIR", dir.path())
        .env("RUST_LOG", "off")
        .write_stdin("config set locale pt-BR\nsummary\n")
        .assert()
        .success()
        .stdout(contains("OK: Preference `locale` updated."))
        .stdout(contains("Total balance : R$ 3.528,75"));

    let saved: finance_core::config::Config =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved.locale, "pt-BR");
    assert!(!saved.ui_color_enabled);
}
