use predicates::str::contains;

mod common;
use common::{add_day_shift, init_and_login, setup_test_db, wl};

#[test]
fn test_edit_replaces_only_the_indexed_entry() {
    let db_path = setup_test_db("edit_single_index");
    init_and_login(&db_path, "ada@example.com");

    add_day_shift(&db_path, "august", "12");
    add_day_shift(&db_path, "august", "13");

    // replace entry #0 with a shorter shift
    wl().args([
        "--db", &db_path, "add", "august", "12", "--in", "10:00", "--out", "14:00", "--wage",
        "20", "--year", "2025", "--edit", "--index", "0",
    ])
    .assert()
    .success()
    .stdout(contains("Updated entry #0 for August (10:00 → 14:00)."));

    // entry #1 untouched, totals recomputed: 4h + 7h
    wl().args(["--db", &db_path, "list", "august"])
        .assert()
        .success()
        .stdout(contains("10:00"))
        .stdout(contains("2025-08-13"))
        .stdout(contains("Total hours: 11.00"))
        .stdout(contains("Total wage: 220.00€"));
}

#[test]
fn test_edit_rejects_unknown_index() {
    let db_path = setup_test_db("edit_unknown_index");
    init_and_login(&db_path, "ada@example.com");

    add_day_shift(&db_path, "august", "12");

    wl().args([
        "--db", &db_path, "add", "august", "12", "--in", "10:00", "--out", "14:00", "--wage",
        "20", "--edit", "--index", "5",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid entry index: 5"));
}

#[test]
fn test_edit_requires_index_flag() {
    let db_path = setup_test_db("edit_requires_index");
    init_and_login(&db_path, "ada@example.com");

    // clap-level constraint: --edit without --index is rejected
    wl().args([
        "--db", &db_path, "add", "august", "12", "--in", "10:00", "--out", "14:00", "--edit",
    ])
    .assert()
    .failure();
}

#[test]
fn test_delete_by_index_shifts_positions() {
    let db_path = setup_test_db("del_shift_positions");
    init_and_login(&db_path, "ada@example.com");

    add_day_shift(&db_path, "august", "10");
    add_day_shift(&db_path, "august", "11");
    add_day_shift(&db_path, "august", "12");

    wl().args(["--db", &db_path, "del", "august", "--index", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted entry #1 (2025-08-11) for August."));

    // remaining entries are renumbered 0..n-1
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let mut stmt = conn
        .prepare("SELECT position, date FROM entries ORDER BY position ASC")
        .expect("prepare");
    let rows: Vec<(i32, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .expect("query")
        .map(|r| r.expect("row"))
        .collect();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], (0, "2025-08-10".to_string()));
    assert_eq!(rows[1], (1, "2025-08-12".to_string()));
}

#[test]
fn test_delete_whole_month() {
    let db_path = setup_test_db("del_whole_month");
    init_and_login(&db_path, "ada@example.com");

    add_day_shift(&db_path, "august", "10");
    add_day_shift(&db_path, "august", "11");
    add_day_shift(&db_path, "march", "3");

    wl().args(["--db", &db_path, "del", "august", "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted all 2 entries for August."));

    // March untouched
    wl().args(["--db", &db_path, "list", "march"])
        .assert()
        .success()
        .stdout(contains("2025-03-03"));

    wl().args(["--db", &db_path, "list", "august"])
        .assert()
        .success()
        .stdout(contains("No entries for August."));
}

#[test]
fn test_delete_empty_month_fails() {
    let db_path = setup_test_db("del_empty_month");
    init_and_login(&db_path, "ada@example.com");

    wl().args(["--db", &db_path, "del", "march", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No entries found for March"));
}

#[test]
fn test_delete_invalid_index_fails() {
    let db_path = setup_test_db("del_invalid_index");
    init_and_login(&db_path, "ada@example.com");

    add_day_shift(&db_path, "august", "10");

    wl().args(["--db", &db_path, "del", "august", "--index", "7", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Invalid entry index: 7"));
}

#[test]
fn test_delete_prompt_can_be_declined() {
    let db_path = setup_test_db("del_declined");
    init_and_login(&db_path, "ada@example.com");

    add_day_shift(&db_path, "august", "10");

    wl().args(["--db", &db_path, "del", "august"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    wl().args(["--db", &db_path, "list", "august"])
        .assert()
        .success()
        .stdout(contains("2025-08-10"));
}
