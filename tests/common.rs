#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("wagelog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wagelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema and open a session for `email` (password "secret")
pub fn init_and_login(db_path: &str, email: &str) {
    wl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    wl().args(["--db", db_path, "signup", email, "secret"])
        .assert()
        .success();

    wl().args(["--db", db_path, "login", email, "secret"])
        .assert()
        .success();
}

/// Add a standard day shift: 09:00-17:00, 60 min break, 20.0/h
pub fn add_day_shift(db_path: &str, month: &str, day: &str) {
    wl().args([
        "--db", db_path, "add", month, day, "--in", "09:00", "--out", "17:00", "--break", "60",
        "--wage", "20", "--year", "2025",
    ])
    .assert()
    .success();
}
