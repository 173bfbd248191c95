use predicates::str::contains;
use std::fs;

mod common;
use common::{add_day_shift, init_and_login, setup_test_db, temp_out, wl};

#[test]
fn test_export_csv_writes_header_and_rows() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_and_login(&db_path, "ada@example.com");

    add_day_shift(&db_path, "august", "12");
    add_day_shift(&db_path, "august", "13");

    wl().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with(
        "month,index,date,start_hour,end_hour,break_minutes,wage,public_holiday"
    ));
    assert!(content.contains("august,0,2025-08-12,09:00,17:00,60,20.0,false"));
    assert!(content.contains("august,1,2025-08-13"));
    assert!(content.contains("140.0"));
}

#[test]
fn test_export_json_contains_derived_fields() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_and_login(&db_path, "ada@example.com");

    add_day_shift(&db_path, "august", "12");

    wl().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["month"], "august");
    assert_eq!(rows[0]["date"], "2025-08-12");
    assert_eq!(rows[0]["hours_worked"], 7.0);
    assert_eq!(rows[0]["daily_wage"], 140.0);
    assert_eq!(rows[0]["public_holiday"], false);
}

#[test]
fn test_export_single_month_filter() {
    let db_path = setup_test_db("export_month_filter");
    let out = temp_out("export_month_filter", "csv");
    init_and_login(&db_path, "ada@example.com");

    add_day_shift(&db_path, "august", "12");
    add_day_shift(&db_path, "march", "3");

    wl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--month", "august",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("2025-08-12"));
    assert!(!content.contains("2025-03-03"));
}

#[test]
fn test_export_xlsx_creates_file() {
    let db_path = setup_test_db("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");
    init_and_login(&db_path, "ada@example.com");

    add_day_shift(&db_path, "august", "12");

    wl().args([
        "--db", &db_path, "export", "--format", "xlsx", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");
    init_and_login(&db_path, "ada@example.com");
    add_day_shift(&db_path, "august", "12");

    wl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", "out.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");
    init_and_login(&db_path, "ada@example.com");
    add_day_shift(&db_path, "august", "12");

    fs::write(&out, "old").expect("seed file");

    // declining the overwrite prompt aborts
    wl().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&out).expect("read"), "old");

    // --force overwrites without asking
    wl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("2025-08-12"));
}

#[test]
fn test_export_empty_selection_warns_without_file() {
    let db_path = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_and_login(&db_path, "ada@example.com");

    wl().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No entries found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_login() {
    let db_path = setup_test_db("export_requires_login");
    let out = temp_out("export_requires_login", "csv");

    wl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_export_csv_filters_by_year() {
    let db_path = setup_test_db("export_csv_year");
    let out = temp_out("export_csv_year", "csv");
    init_and_login(&db_path, "ada@example.com");

    add_day_shift(&db_path, "august", "12");

    wl().args([
        "--db", &db_path, "add", "august", "12", "--in", "09:00", "--out", "13:00", "--wage",
        "20", "--year", "2024",
    ])
    .assert()
    .success();

    wl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--month", "august",
        "--year", "2024",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("2024-08-12"));
    assert!(!content.contains("2025-08-12"));
}
