use predicates::str::contains;

mod common;
use common::{init_and_login, setup_test_db, wl};

#[test]
fn test_punch_in_requires_login() {
    let db_path = setup_test_db("punch_requires_login");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "punch", "in", "--wage", "12.5"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_punch_in_requires_positive_wage() {
    let db_path = setup_test_db("punch_wage_zero");
    init_and_login(&db_path, "ada@example.com");

    wl().args(["--db", &db_path, "punch", "in", "--wage", "0"])
        .assert()
        .failure()
        .stderr(contains("hourly wage is required to punch in"));
}

#[test]
fn test_punch_in_twice_fails() {
    let db_path = setup_test_db("punch_twice");
    init_and_login(&db_path, "ada@example.com");

    wl().args(["--db", &db_path, "punch", "in", "--wage", "12.5"])
        .assert()
        .success()
        .stdout(contains("Punched in at"));

    wl().args(["--db", &db_path, "punch", "in", "--wage", "12.5"])
        .assert()
        .failure()
        .stderr(contains("already punched in since"));
}

#[test]
fn test_punch_out_without_open_punch_fails() {
    let db_path = setup_test_db("punch_out_closed");
    init_and_login(&db_path, "ada@example.com");

    wl().args(["--db", &db_path, "punch", "out"])
        .assert()
        .failure()
        .stderr(contains("not punched in"));
}

#[test]
fn test_punch_status_without_open_punch() {
    let db_path = setup_test_db("punch_status_none");
    init_and_login(&db_path, "ada@example.com");

    wl().args(["--db", &db_path, "punch", "status"])
        .assert()
        .success()
        .stdout(contains("No open punch."));
}

#[test]
fn test_punch_in_out_records_entry() {
    let db_path = setup_test_db("punch_full_flow");
    init_and_login(&db_path, "ada@example.com");

    wl().args(["--db", &db_path, "punch", "in", "--wage", "12.5"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "punch", "status"])
        .assert()
        .success()
        .stdout(contains("Punched in since"));

    wl().args(["--db", &db_path, "punch", "out"])
        .assert()
        .success()
        .stdout(contains("Punched out:"));

    // exactly one entry recorded, at the punch wage, no premiums
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let (count, wage, holiday, increase): (i64, f64, i32, i32) = conn
        .query_row(
            "SELECT COUNT(*), wage, public_holiday, night_shift_increase FROM entries",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )
        .expect("query entries");

    assert_eq!(count, 1);
    assert_eq!(wage, 12.5);
    assert_eq!(holiday, 0);
    assert_eq!(increase, 0);

    // the punch state is cleared after punching out
    wl().args(["--db", &db_path, "punch", "status"])
        .assert()
        .success()
        .stdout(contains("No open punch."));
}

#[test]
fn test_punch_pause_resume_cycle() {
    let db_path = setup_test_db("punch_pause_resume");
    init_and_login(&db_path, "ada@example.com");

    wl().args(["--db", &db_path, "punch", "pause"])
        .assert()
        .failure()
        .stderr(contains("not punched in"));

    wl().args(["--db", &db_path, "punch", "in", "--wage", "12.5"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "punch", "resume"])
        .assert()
        .failure()
        .stderr(contains("not paused"));

    wl().args(["--db", &db_path, "punch", "pause"])
        .assert()
        .success()
        .stdout(contains("Paused."));

    wl().args(["--db", &db_path, "punch", "pause"])
        .assert()
        .failure()
        .stderr(contains("already paused"));

    wl().args(["--db", &db_path, "punch", "resume"])
        .assert()
        .success()
        .stdout(contains("Resumed"));

    // punching out while paused is fine too
    wl().args(["--db", &db_path, "punch", "pause"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "punch", "out"])
        .assert()
        .success()
        .stdout(contains("Punched out:"));
}

#[test]
fn test_punch_out_requires_login() {
    let db_path = setup_test_db("punch_out_logged_out");
    init_and_login(&db_path, "ada@example.com");

    wl().args(["--db", &db_path, "punch", "in", "--wage", "12.5"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "logout"]).assert().success();

    wl().args(["--db", &db_path, "punch", "out"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));

    wl().args(["--db", &db_path, "punch", "pause"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));

    // the open shift survives and can be closed after logging back in
    wl().args(["--db", &db_path, "login", "ada@example.com", "secret"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "punch", "out"])
        .assert()
        .success();
}
