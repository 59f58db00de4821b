use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// One-time schema setup, run when the store is opened.
/// Idempotent: an up-to-date database is left untouched.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    Ok(run_pending_migrations(conn)?)
}
