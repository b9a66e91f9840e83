#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("worklog")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file.
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize storage and add a small dataset useful for many tests.
pub fn init_db_with_data(db_path: &str) {
    wl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--db",
        db_path,
        "add",
        "2025-09-01",
        "--in",
        "09:00",
        "--out",
        "17:00",
        "--desc",
        "Client website",
        "--rate",
        "50",
    ])
    .assert()
    .success();

    wl().args([
        "--db",
        db_path,
        "add",
        "2025-09-15",
        "--in",
        "10:00",
        "--out",
        "12:30",
        "--desc",
        "Code review",
        "--rate",
        "80",
        "--paid",
    ])
    .assert()
    .success();
}

/// Extract the short id from the first data row of `list` output.
pub fn first_listed_id(db_path: &str) -> String {
    let output = wl()
        .args(["--db", db_path, "list"])
        .output()
        .expect("run list");
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Row 0 is the header, row 1 the separator line.
    let row = stdout.lines().nth(2).expect("at least one entry row");
    row.split_whitespace()
        .next()
        .expect("id column")
        .to_string()
}
