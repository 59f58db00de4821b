use crate::db::log::OP_MIGRATION;
use crate::db::models::{COLUMNS, TABLE};
use crate::ui::messages::{success, warning};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `records` table exists.
pub fn records_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([TABLE], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Columns currently present on the `records` table.
fn records_columns(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{TABLE}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;
    cols.collect()
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
        [Local::now().to_rfc3339().as_str(), OP_MIGRATION, version, message],
    )?;
    Ok(())
}

/// Create the `records` table: one TEXT column per field, date as primary key.
fn create_records_table(conn: &Connection) -> Result<()> {
    let defs: Vec<String> = COLUMNS
        .iter()
        .map(|c| {
            if *c == "date" {
                format!("\"{c}\" TEXT PRIMARY KEY")
            } else {
                format!("\"{c}\" TEXT NOT NULL DEFAULT ''")
            }
        })
        .collect();

    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {TABLE} (\n  {}\n);",
        defs.join(",\n  ")
    ))?;

    mark_applied(conn, "0001_create_records", "Created records table")?;
    Ok(())
}

/// Add any column an older `records` table is missing.
fn migrate_add_missing_columns(conn: &Connection) -> Result<()> {
    let present = records_columns(conn)?;
    let missing: Vec<&str> = COLUMNS
        .iter()
        .copied()
        .filter(|c| !present.iter().any(|p| p == c))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    warning(format!("Adding missing columns to {TABLE}: {}", missing.join(", ")));

    let tx = conn.unchecked_transaction()?;
    for c in &missing {
        tx.execute_batch(&format!(
            "ALTER TABLE {TABLE} ADD COLUMN \"{c}\" TEXT NOT NULL DEFAULT '';"
        ))?;
    }
    mark_applied(
        &tx,
        "0002_add_missing_columns",
        &format!("Added columns: {}", missing.join(", ")),
    )?;
    tx.commit()?;

    success("Records table upgraded.");
    Ok(())
}

/// Public entry point: run all pending migrations. Idempotent.
///
/// Invoked by db::init_db() when the store is opened.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Records table: create or upgrade
    if !records_table_exists(conn)? {
        create_records_table(conn)?;
    } else {
        migrate_add_missing_columns(conn)?;
    }

    Ok(())
}
