use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn trip_budget(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("trip-budget").unwrap();
    cmd.env("TRIP_BUDGET_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn full_session_reports_remaining_budget() {
    let data_dir = TempDir::new().unwrap();

    trip_budget(&data_dir)
        .write_stdin("1000.00\n5\n100.00\ny\nhotel\n400.00\n2\ny\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to your Travel Budget Planner"))
        .stdout(predicate::str::contains("Remaining budget:    £600.00"))
        .stdout(predicate::str::contains("Remaining per day:   £120.00"))
        .stdout(predicate::str::contains("You are on budget"));
}

#[test]
fn session_writes_trip_document_and_settings() {
    let data_dir = TempDir::new().unwrap();

    trip_budget(&data_dir)
        .write_stdin("1000\n5\n100\ny\nhotel\n400\n2\ny\nn\n")
        .assert()
        .success();

    let document = std::fs::read_to_string(data_dir.path().join("trip-document.txt")).unwrap();
    assert!(document.contains("Expense added: hotel: £400.00 (Accommodation)"));
    assert!(document.contains("Trip summary"));
    assert!(data_dir.path().join("config.json").exists());
    assert!(data_dir.path().join("trip-budget.log").exists());
}

#[test]
fn no_mirror_flag_skips_document() {
    let data_dir = TempDir::new().unwrap();

    trip_budget(&data_dir)
        .arg("--no-mirror")
        .write_stdin("1000\n5\n100\ny\nhotel\n400\n2\ny\nn\n")
        .assert()
        .success();

    assert!(!data_dir.path().join("trip-document.txt").exists());
}

#[test]
fn intro_file_is_shown_verbatim() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("intro.txt"), "Pack light, spend wisely.\n").unwrap();

    trip_budget(&data_dir)
        .write_stdin("100\n1\n50\ny\ntaxi\n20\n1\ny\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pack light, spend wisely."));
}

#[test]
fn overspending_is_reported() {
    let data_dir = TempDir::new().unwrap();

    trip_budget(&data_dir)
        .write_stdin("100.00\n2\n10\ny\nsurprise fee\n150.00\n4\ny\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining budget:    -£50.00"))
        .stdout(predicate::str::contains("You are over budget"));
}

#[test]
fn closed_input_fails() {
    let data_dir = TempDir::new().unwrap();

    trip_budget(&data_dir)
        .write_stdin("1000\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input closed"));
}
