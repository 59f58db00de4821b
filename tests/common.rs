#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rdaybook::db::models::{COLUMNS, RecordRow};
use rdaybook::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with every access-gate variable cleared so runs are local and open.
/// HOME points at an empty temp dir so no user config file is picked up.
pub fn rdb() -> Command {
    let mut cmd = cargo_bin_cmd!("rdaybook");
    cmd.env("HOME", env::temp_dir().join("rdaybook_test_home"));
    for var in [
        "APP_USERNAME",
        "APP_PASSWORD",
        "DEV_NO_AUTH",
        "RAILWAY_ENVIRONMENT",
        "RAILWAY_PROJECT_ID",
        "RAILWAY_SERVICE_ID",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdaybook.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdaybook_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh database with the schema in place
pub fn open_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    DbPool::new(&db_path).expect("open db")
}

/// Raw row from `(column, value)` pairs; unnamed columns stay blank.
pub fn raw_row(date: &str, values: &[(&str, &str)]) -> RecordRow {
    let mut cells = vec![String::new(); COLUMNS.len()];
    cells[0] = date.to_string();
    for (col, v) in values {
        let i = COLUMNS
            .iter()
            .position(|c| c == col)
            .expect("known column");
        cells[i] = v.to_string();
    }
    RecordRow::from_cells(cells).expect("row")
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    rdb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rdb()
        .args([
            "--db",
            db_path,
            "add",
            "2025-09-01",
            "--hours",
            "4",
            "--client",
            "u=10000",
        ])
        .assert()
        .success();

    rdb()
        .args([
            "--db",
            db_path,
            "add",
            "2025-09-15",
            "--hours",
            "6",
            "--flex",
            "2",
            "--client",
            "afrex=8,000",
            "--client",
            "r=12000",
            "--memo",
            "busy day",
        ])
        .assert()
        .success();
}
