use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, open_pool, raw_row, rdb, setup_test_db, temp_out};
use rdaybook::db::models::COLUMNS;
use rdaybook::db::pool::DbPool;
use rdaybook::db::queries::{count_records, load_month_records, load_row, load_rows, upsert_row};
use rdaybook::errors::AppError;
use rdaybook::export::range::parse_range;
use rdaybook::export::{ExportFormat, ExportLogic, ImportLogic};
use rdaybook::models::YearMonth;

fn header() -> String {
    COLUMNS.join(",")
}

#[test]
fn test_export_csv_header_and_rows() {
    let db_path = setup_test_db("export_csv_header");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv_header", "csv");

    rdb()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed (2 rows)"));

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next().unwrap(), header());
    assert!(lines.next().unwrap().starts_with("2025-09-01,10000,4,"));
    assert!(content.contains("busy day"));
}

#[test]
fn test_export_import_round_trip() {
    let db_path = setup_test_db("export_round_trip_src");
    init_db_with_data(&db_path);
    let out = temp_out("export_round_trip", "csv");

    rdb()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    let target = setup_test_db("export_round_trip_dst");
    rdb()
        .args(["--db", &target, "import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Imported 2 row(s)"));

    let src = DbPool::new(&db_path).unwrap();
    let dst = DbPool::new(&target).unwrap();
    assert_eq!(load_rows(&src.conn).unwrap(), load_rows(&dst.conn).unwrap());
}

#[test]
fn test_export_range_filter() {
    let pool = open_pool("export_range_filter");
    for d in ["2025-08-31", "2025-09-01", "2025-09-30", "2025-10-01"] {
        upsert_row(&pool.conn, &raw_row(d, &[("total_sales", "1000")])).unwrap();
    }

    let rows = ExportLogic::select_rows(&pool, parse_range(Some("2025-09")).unwrap()).unwrap();
    let keys: Vec<&str> = rows.iter().map(|r| r.date_key()).collect();
    assert_eq!(keys, vec!["2025-09-01", "2025-09-30"]);

    let rows =
        ExportLogic::select_rows(&pool, parse_range(Some("2025-08-31:2025-09-01")).unwrap()).unwrap();
    assert_eq!(rows.len(), 2);

    let all = ExportLogic::select_rows(&pool, parse_range(Some("all")).unwrap()).unwrap();
    assert_eq!(all.len(), 4);

    // nothing in range: nothing written, no error
    let out = temp_out("export_range_empty", "csv");
    let n = ExportLogic::export(&pool, ExportFormat::Csv, &out, Some("2030"), false).unwrap();
    assert_eq!(n, 0);
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_bad_range_rejected() {
    assert!(parse_range(Some("2025-13")).is_err());
    assert!(parse_range(Some("2025-09-30:2025-09-01")).is_err());
    assert!(parse_range(Some("yesterday")).is_err());
}

#[test]
fn test_export_json_keys_in_column_order() {
    let db_path = setup_test_db("export_json_order");
    init_db_with_data(&db_path);
    let out = temp_out("export_json_order", "json");

    rdb()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--range", "2025-09-15",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["date"], "2025-09-15");
    assert_eq!(rows[0]["total_sales"], "20000");
    assert_eq!(rows[0]["hourly_rate"], "3333");

    // textual key order follows the column order
    let positions: Vec<usize> = COLUMNS
        .iter()
        .map(|c| content.find(&format!("\"{c}\":")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    rdb()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_data(&db_path);
    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").unwrap();

    rdb()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("--force"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rdb()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("date,"));
}

#[test]
fn test_import_month_replaces_whole_month() {
    let mut pool = open_pool("import_month_replace");
    upsert_row(&pool.conn, &raw_row("2025-09-01", &[("total_sales", "111")])).unwrap();
    upsert_row(&pool.conn, &raw_row("2025-09-02", &[("total_sales", "222")])).unwrap();
    upsert_row(&pool.conn, &raw_row("2025-10-01", &[("total_sales", "333")])).unwrap();

    let file = temp_out("import_month_replace", "csv");
    fs::write(&file, "date,total_sales,memo\n2025-09-02,999,replaced\n").unwrap();

    let summary =
        ImportLogic::import(&mut pool, &file, Some(YearMonth::new(2025, 9).unwrap())).unwrap();
    assert_eq!(summary.imported, 1);
    assert_eq!(summary.replaced, 2);

    assert_eq!(load_row(&pool.conn, "2025-09-01").unwrap(), None);
    let row = load_row(&pool.conn, "2025-09-02").unwrap().unwrap();
    assert_eq!(row.get("total_sales"), "999");
    assert_eq!(row.get("memo"), "replaced");
    // columns missing from the file are blank
    assert_eq!(row.get("total_hours"), "");
    assert!(load_row(&pool.conn, "2025-10-01").unwrap().is_some());
}

#[test]
fn test_import_rejects_before_any_write() {
    let mut pool = open_pool("import_reject");
    upsert_row(&pool.conn, &raw_row("2025-09-01", &[("total_sales", "111")])).unwrap();
    let month = Some(YearMonth::new(2025, 9).unwrap());

    let cases = [
        ("missing_date", "total_sales\n500\n".to_string()),
        ("unknown_col", "date,bonus\n2025-09-03,1\n".to_string()),
        ("blank_date", "date,total_sales\n,500\n".to_string()),
        (
            "outside_month",
            "date,total_sales\n2025-09-03,1\n2025-10-01,2\n".to_string(),
        ),
    ];

    for (name, body) in cases {
        let file = temp_out(&format!("import_reject_{name}"), "csv");
        fs::write(&file, body).unwrap();

        let err = ImportLogic::import(&mut pool, &file, month).unwrap_err();
        assert!(matches!(err, AppError::Integrity(_)), "{name}: {err:?}");

        // month wipe never ran, nothing was added
        assert_eq!(count_records(&pool.conn).unwrap(), 1, "{name}");
        assert!(load_row(&pool.conn, "2025-09-03").unwrap().is_none(), "{name}");
    }
}

#[test]
fn test_import_cli_reports_integrity_error() {
    let db_path = setup_test_db("import_cli_integrity");
    init_db_with_data(&db_path);
    let file = temp_out("import_cli_integrity", "csv");
    fs::write(&file, "memo\nhello\n").unwrap();

    rdb()
        .args(["--db", &db_path, "import", "--file", &file])
        .assert()
        .failure()
        .stderr(contains("Integrity error"));
}

#[test]
fn test_import_canonicalizes_date_keys() {
    let mut pool = open_pool("import_canonical_keys");
    upsert_row(
        &pool.conn,
        &raw_row("2025-09-05", &[("total_sales", "10000"), ("total_hours", "5")]),
    )
    .unwrap();

    let file = temp_out("import_canonical_keys", "csv");
    fs::write(
        &file,
        "date,total_sales,total_hours\n2025-9-5,20000,5\n 2025-09-06 ,3000,1\n",
    )
    .unwrap();

    let summary = ImportLogic::import(&mut pool, &file, None).unwrap();
    assert_eq!(summary.imported, 2);

    // same calendar day, same row: the import replaced it
    assert_eq!(count_records(&pool.conn).unwrap(), 2);
    assert!(load_row(&pool.conn, "2025-9-5").unwrap().is_none());
    let row = load_row(&pool.conn, "2025-09-05").unwrap().unwrap();
    assert_eq!(row.get("total_sales"), "20000");
    assert!(load_row(&pool.conn, "2025-09-06").unwrap().is_some());

    let sept = load_month_records(&pool.conn, YearMonth::new(2025, 9).unwrap()).unwrap();
    let total: i64 = sept.iter().map(|r| r.total_sales).sum();
    assert_eq!(sept.len(), 2);
    assert_eq!(total, 23_000);
}

#[test]
fn test_import_rejects_unparseable_date() {
    let mut pool = open_pool("import_bad_date");
    let file = temp_out("import_bad_date", "csv");
    fs::write(&file, "date,total_sales\n2025-09-01,100\n2025/09/07,500\n").unwrap();

    let err = ImportLogic::import(&mut pool, &file, None).unwrap_err();
    assert!(matches!(err, AppError::Integrity(_)), "{err:?}");
    assert!(err.to_string().contains("2025/09/07"));
    assert_eq!(count_records(&pool.conn).unwrap(), 0);
}

#[test]
fn test_month_replace_wipes_unpadded_stored_keys() {
    let mut pool = open_pool("import_month_unpadded");
    // rows written by an older build, before keys were canonical
    upsert_row(&pool.conn, &raw_row("2025-9-3", &[("total_sales", "111")])).unwrap();
    upsert_row(&pool.conn, &raw_row("2025-09-04", &[("total_sales", "222")])).unwrap();
    upsert_row(&pool.conn, &raw_row("2025-10-1", &[("total_sales", "333")])).unwrap();

    let file = temp_out("import_month_unpadded", "csv");
    fs::write(&file, "date,total_sales\n2025-09-10,999\n").unwrap();

    let summary =
        ImportLogic::import(&mut pool, &file, Some(YearMonth::new(2025, 9).unwrap())).unwrap();
    assert_eq!(summary.replaced, 2);
    assert_eq!(summary.imported, 1);

    let keys: Vec<String> = load_rows(&pool.conn)
        .unwrap()
        .iter()
        .map(|r| r.date_key().to_string())
        .collect();
    assert_eq!(keys, vec!["2025-09-10", "2025-10-1"]);
}
