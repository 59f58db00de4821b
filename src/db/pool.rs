//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// How long a write waits on a locked database before failing as a connectivity error.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database and make sure the schema exists.
    /// This is the only place schema checks run; queries assume the tables are there.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Self::open_raw(path)?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Open without touching the schema (used by `db --check` and `db --info`).
    pub fn open_raw(path: &str) -> AppResult<Connection> {
        let conn = Connection::open(Path::new(path))?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        func(&mut self.conn)
    }
}
