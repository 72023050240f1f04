use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn english_home() -> TempDir {
    let home = TempDir::new().expect("tempdir");
    fs::write(home.path().join("config.json"), r#"{"language": "en"}"#).expect("config");
    home
}

fn spendbook(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("spendbook").expect("bin");
    cmd.arg("--data-dir").arg(home);
    cmd
}

fn add(home: &Path, date: &str, category: &str, amount: &str) {
    spendbook(home)
        .args(["add", "--date", date, "--category", category, "--amount", amount])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added."));
}

#[test]
fn add_then_list() {
    let home = english_home();
    add(home.path(), "2024-03-01", "Food", "100");
    add(home.path(), "2024-03-15", "Rent", "500");

    spendbook(home.path())
        .args(["list", "--category", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-01"))
        .stdout(predicate::str::contains("₹100.00"))
        .stdout(predicate::str::contains("Rent").not());
}

#[test]
fn invalid_amount_is_rejected() {
    let home = english_home();
    spendbook(home.path())
        .args(["add", "--date", "2024-03-01", "--category", "Food", "--amount", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid amount."));

    spendbook(home.path())
        .args(["add", "--amount", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill in all required fields."));
}

#[test]
fn edit_unknown_id_fails_and_delete_unknown_succeeds() {
    let home = english_home();
    spendbook(home.path())
        .args(["edit", "5", "--date", "2024-03-01", "--category", "Food", "--amount", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found."));

    spendbook(home.path())
        .args(["delete", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense deleted."));
}

#[test]
fn budget_set_and_show() {
    let home = english_home();
    spendbook(home.path())
        .args(["budget", "set", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid budget."));

    spendbook(home.path())
        .args(["budget", "set", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget set."));

    spendbook(home.path())
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹1000.00"));
}

#[test]
fn csv_export_with_nothing_to_export() {
    let home = english_home();
    spendbook(home.path())
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("There are no expenses to export."));
}

#[test]
fn csv_export_writes_unescaped_rows() {
    let home = english_home();
    let out = home.path().join("out.csv");
    spendbook(home.path())
        .args(["add", "--date", "2024-03-01", "--category", "Food", "--amount", "30"])
        .args(["--description", "milk, bread"])
        .assert()
        .success();

    spendbook(home.path())
        .args(["export", "csv", "--output"])
        .arg(&out)
        .assert()
        .success();

    let csv = fs::read_to_string(&out).expect("csv");
    assert_eq!(
        csv,
        "date,category,amount,description\n2024-03-01,Food,30,milk, bread\n"
    );
}

#[test]
fn json_export_imports_elsewhere() {
    let home = english_home();
    let out = home.path().join("backup.json");
    add(home.path(), "2024-03-01", "Food", "100");
    spendbook(home.path()).args(["budget", "set", "750"]).assert().success();

    spendbook(home.path())
        .args(["export", "json", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data exported."));

    let other = english_home();
    spendbook(other.path())
        .arg("import")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data imported."));

    spendbook(other.path())
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹750.00"));
}

#[test]
fn import_bad_file_is_rejected() {
    let home = english_home();
    let bad = home.path().join("bad.json");
    fs::write(&bad, r#"{"expenses": "not a list"}"#).expect("write");

    spendbook(home.path())
        .arg("import")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("The file format is invalid."));
}

#[test]
fn restore_from_snapshot() {
    let home = english_home();
    add(home.path(), "2024-03-01", "Food", "100");

    let data = home.path().join("data");
    fs::write(data.join("primary").join("expenses"), "[]").expect("damage primary");
    fs::remove_file(data.join("records.json")).expect("remove records");

    spendbook(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));

    spendbook(home.path())
        .arg("restore")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data restored from backup."));

    spendbook(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn clear_requires_confirmation() {
    let home = english_home();
    add(home.path(), "2024-03-01", "Food", "100");

    spendbook(home.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));
    spendbook(home.path())
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("Food"));

    spendbook(home.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared."));
    spendbook(home.path())
        .arg("restore")
        .assert()
        .success()
        .stdout(predicate::str::contains("No backup found."));
}

#[test]
fn monthly_report_uses_gujarati_by_default() {
    let home = TempDir::new().expect("tempdir");
    spendbook(home.path())
        .args(["add", "--date", "2024-03-01", "--category", "Food", "--amount", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ખર્ચ સફળતાપૂર્વક ઉમેરાયો!"));

    spendbook(home.path())
        .args(["report", "monthly", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("માર્ચ"));
}
