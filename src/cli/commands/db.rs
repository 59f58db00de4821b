use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{records_table_exists, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::queries::load_rows;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use rusqlite::Connection;

/// SQLite's own check plus a scan for rows whose date key is unreadable.
fn check_store(conn: &Connection) -> AppResult<()> {
    info("Checking database integrity…");

    let verdict: String = conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    if verdict != "ok" {
        error(format!("Integrity check failed: {verdict}"));
        return Ok(());
    }
    success("Integrity check passed.");

    if !records_table_exists(conn)? {
        warning("No records table yet (run `rdaybook init` or `db --migrate`).");
        return Ok(());
    }

    let corrupt: Vec<String> = load_rows(conn)?
        .into_iter()
        .filter(|r| r.parsed_date().is_none())
        .map(|r| format!("'{}'", r.date_key()))
        .collect();
    if !corrupt.is_empty() {
        warning(format!(
            "{} row(s) with an unreadable date key: {}",
            corrupt.len(),
            corrupt.join(", ")
        ));
    }
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    // the store is opened as-is: only --migrate may change the schema
    let conn = DbPool::open_raw(&cfg.database)?;

    if *migrate {
        info("Applying pending migrations…");
        run_pending_migrations(&conn)?;
        success("Schema is up to date.");
    }

    if *show_info {
        stats::print_db_info(&conn, &cfg.database)?;
    }

    if *check {
        check_store(&conn)?;
    }

    if *vacuum {
        info("Compacting database file…");
        conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}
