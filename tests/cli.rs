use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
  "expenses": [
    {"description": "Starbucks Coffee", "amount": 850, "category": "Food & Dining", "date": "2024-01-15"},
    {"description": "Uber Ride", "amount": 2500, "category": "Transportation", "date": "2024-01-14"},
    {"description": "Netflix Subscription", "amount": 1599, "category": "Entertainment", "date": "2024-01-13", "kind": "recurring"},
    {"description": "Amazon Purchase", "amount": 43250, "category": "Shopping", "date": "2024-01-12"}
  ],
  "budgets": [
    {"category": "Food & Dining", "allocated": 50000, "last_updated": "2024-01-01"},
    {"category": "Shopping", "allocated": 40000, "last_updated": "2024-01-01"}
  ],
  "goals": [
    {"name": "Summer Trip", "target": 66400, "current": 14900, "deadline": "2024-05-01", "created_on": "2024-01-01"}
  ]
}"#;

fn setup() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let snapshot = dir.path().join("snapshot.json");
    std::fs::write(&snapshot, SNAPSHOT).unwrap();
    (dir, snapshot)
}

fn finsight(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finsight").unwrap();
    cmd.env("FINSIGHT_DATA_DIR", dir.path())
        .env_remove("FINSIGHT_SNAPSHOT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn suggest_prints_category() {
    let dir = TempDir::new().unwrap();
    finsight(&dir)
        .args(["suggest", "Starbucks", "Coffee"])
        .assert()
        .success()
        .stdout("Food & Dining\n");
}

#[test]
fn dashboard_uses_default_snapshot_location() {
    let (dir, _) = setup();
    finsight(&dir)
        .args(["dashboard", "--today", "2024-01-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard for 2024-01-16"))
        .stdout(predicate::str::contains("Starbucks Coffee"))
        .stdout(predicate::str::contains("1 goals, 0 completed"));
}

#[test]
fn budgets_reports_overspending() {
    let (dir, snapshot) = setup();
    finsight(&dir)
        .arg("--snapshot")
        .arg(&snapshot)
        .arg("budgets")
        .assert()
        .success()
        .stdout(predicate::str::contains("$32.50 over"))
        .stdout(predicate::str::contains("Unbudgeted spending"));
}

#[test]
fn expenses_filters_and_sorts() {
    let (dir, _) = setup();
    finsight(&dir)
        .args(["expenses", "--category", "Food & Dining"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Starbucks Coffee"))
        .stdout(predicate::str::contains("Uber Ride").not())
        .stdout(predicate::str::contains("1 expenses"));

    finsight(&dir)
        .args(["expenses", "--sort", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort key"));
}

#[test]
fn goals_json_output() {
    let (dir, _) = setup();
    let output = finsight(&dir)
        .args(["goals", "--json", "--today", "2024-04-15"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let projection = &value["rows"][0]["projection"];
    assert_eq!(projection["urgency"], "urgent");
    assert_eq!(projection["days_remaining"], 16);
    assert_eq!(projection["monthly_contribution"], 51500);
}

#[test]
fn malformed_snapshot_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("snapshot.json"),
        r#"{"expenses": [{"description": "Refund", "amount": -500, "category": "Shopping", "date": "2024-01-12"}]}"#,
    )
    .unwrap();

    finsight(&dir)
        .arg("budgets")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed expense"));
}

#[test]
fn missing_snapshot_fails() {
    let dir = TempDir::new().unwrap();
    finsight(&dir)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No snapshot found"));
}

#[test]
fn config_set_then_show() {
    let dir = TempDir::new().unwrap();
    finsight(&dir)
        .args(["config", "set", "currency_symbol", "€"])
        .assert()
        .success();

    finsight(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("currency_symbol:      €"));
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn config_rejects_unknown_date_specifier() {
    let dir = TempDir::new().unwrap();
    finsight(&dir)
        .args(["config", "set", "date_format", "%Q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn non_numeric_amount_is_malformed() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("snapshot.json"),
        r#"{"expenses": [{"description": "Pizza", "amount": "abc", "category": "Food & Dining", "date": "2024-01-12"}]}"#,
    )
    .unwrap();

    finsight(&dir)
        .arg("expenses")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed expense"));
}
