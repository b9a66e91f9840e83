use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{first_listed_id, init_db_with_data, setup_test_db, wl};

#[test]
fn add_and_list_sessions() {
    let db_path = setup_test_db("add_and_list");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("Client website"))
        .stdout(contains("R$ 50,00"))
        .stdout(contains("2025-09-15"))
        .stdout(contains("Code review"))
        .stdout(contains("2 entries"));
}

#[test]
fn list_filters_by_period() {
    let db_path = setup_test_db("list_period");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "list", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Client website"))
        .stdout(contains("Code review").not());

    wl().args(["--db", &db_path, "list", "--period", "2025"])
        .assert()
        .success()
        .stdout(contains("2 entries"));
}

#[test]
fn list_filters_by_payment_status() {
    let db_path = setup_test_db("list_payment");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "list", "--unpaid"])
        .assert()
        .success()
        .stdout(contains("Client website"))
        .stdout(contains("Code review").not());

    wl().args(["--db", &db_path, "list", "--paid"])
        .assert()
        .success()
        .stdout(contains("Code review"))
        .stdout(contains("Client website").not());
}

#[test]
fn add_rejects_malformed_input() {
    let db_path = setup_test_db("add_rejects");
    init_db_with_data(&db_path);

    wl().args([
        "--db", &db_path, "add", "2025-09-20", "--in", "25:00", "--out", "17:00", "--desc", "x",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time format"));

    wl().args([
        "--db", &db_path, "add", "not-a-date", "--in", "09:00", "--out", "17:00", "--desc", "x",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date format"));

    wl().args([
        "--db", &db_path, "add", "2025-09-20", "--in", "09:00", "--out", "17:00", "--desc", "  ",
    ])
    .assert()
    .failure()
    .stderr(contains("Description must not be empty"));

    wl().args([
        "--db", &db_path, "add", "2025-09-20", "--in", "09:00", "--out", "17:00", "--desc", "x",
        "--rate", "0",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid hourly rate"));

    // Nothing above may have slipped into the ledger.
    wl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2 entries"));
}

#[test]
fn paid_toggles_one_entry() {
    let db_path = setup_test_db("paid_toggle");
    init_db_with_data(&db_path);

    let id = first_listed_id(&db_path);

    wl().args(["--db", &db_path, "paid", &id])
        .assert()
        .success()
        .stdout(contains("marked as paid"));

    wl().args(["--db", &db_path, "paid", &id])
        .assert()
        .success()
        .stdout(contains("marked as unpaid"));

    wl().args(["--db", &db_path, "paid", "ffffffff"])
        .assert()
        .success()
        .stdout(contains("nothing changed"));
}

#[test]
fn edit_updates_selected_fields() {
    let db_path = setup_test_db("edit_fields");
    init_db_with_data(&db_path);

    let id = first_listed_id(&db_path);

    wl().args([
        "--db", &db_path, "edit", &id, "--desc", "Reworked homepage", "--rate", "65",
    ])
    .assert()
    .success()
    .stdout(contains("updated"));

    wl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Reworked homepage"))
        .stdout(contains("R$ 65,00"))
        .stdout(contains("Client website").not());
}

#[test]
fn del_removes_entry_after_confirmation_flag() {
    let db_path = setup_test_db("del_entry");
    init_db_with_data(&db_path);

    let id = first_listed_id(&db_path);

    wl().args(["--db", &db_path, "del", &id, "-y"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    wl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("1 entries"));
}

#[test]
fn del_unknown_id_changes_nothing() {
    let db_path = setup_test_db("del_unknown");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "del", "deadbeef", "-y"])
        .assert()
        .success()
        .stdout(contains("nothing deleted"));

    wl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2 entries"));
}

#[test]
fn stats_aggregates_the_ledger() {
    let db_path = setup_test_db("stats_agg");
    init_db_with_data(&db_path);

    // 8h at 50 (unpaid) + 2.5h at 80 (paid) = 10.50h, R$ 600,00 total.
    wl().args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("10.50"))
        .stdout(contains("R$ 600,00"))
        .stdout(contains("Days worked"))
        .stdout(contains("2"));
}

#[test]
fn summary_lists_days_newest_first() {
    let db_path = setup_test_db("summary_days");
    init_db_with_data(&db_path);

    let output = wl()
        .args(["--db", &db_path, "summary"])
        .output()
        .expect("run summary");
    let stdout = String::from_utf8_lossy(&output.stdout);

    let pos_new = stdout.find("2025-09-15").expect("newest day shown");
    let pos_old = stdout.find("2025-09-01").expect("oldest day shown");
    assert!(pos_new < pos_old, "newest day must come first");
    assert!(stdout.contains("2 days"));
}

#[test]
fn config_rate_applies_to_new_entries() {
    let db_path = setup_test_db("config_rate");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "config", "--rate", "99"])
        .assert()
        .success()
        .stdout(contains("R$ 99,00"));

    wl().args([
        "--db",
        &db_path,
        "add",
        "2025-10-01",
        "--in",
        "09:00",
        "--out",
        "10:00",
        "--desc",
        "Default-rate session",
    ])
    .assert()
    .success();

    wl().args(["--db", &db_path, "list", "--period", "2025-10"])
        .assert()
        .success()
        .stdout(contains("R$ 99,00"));
}

#[test]
fn clear_wipes_the_ledger() {
    let db_path = setup_test_db("clear_all");
    init_db_with_data(&db_path);

    wl().args(["--db", &db_path, "clear", "-y"])
        .assert()
        .success()
        .stdout(contains("All data removed"));

    wl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries found"));
}

#[test]
fn overnight_sessions_are_recorded_not_rejected() {
    let db_path = setup_test_db("overnight_add");
    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--db",
        &db_path,
        "add",
        "2025-11-03",
        "--in",
        "23:00",
        "--out",
        "01:00",
        "--desc",
        "Night deploy",
    ])
    .assert()
    .success()
    .stdout(contains("Recorded 2h on 2025-11-03"));
}
