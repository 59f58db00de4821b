//! Audit trail: one line in the `log` table per state-changing operation.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, params};

pub const OP_INIT: &str = "init";
pub const OP_ADD: &str = "add";
pub const OP_EDIT: &str = "edit";
pub const OP_DEL: &str = "del";
pub const OP_DEL_MONTH: &str = "del_month";
pub const OP_IMPORT: &str = "import";
/// Written by the migration engine itself
pub const OP_MIGRATION: &str = "migration_applied";

pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![Local::now().to_rfc3339(), operation, target, message])?;
    Ok(())
}

/// Same as [`ttlog`], but a failure only prints a warning.
pub fn ttlog_soft(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
