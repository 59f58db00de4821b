//! Persistence gateway for the `records` table.
//!
//! All operations assume the schema exists (see `db::initialize`). Failures of the
//! store propagate to the caller unchanged; nothing here retries.

use crate::db::models::{COLUMNS, RecordRow, TABLE};
use crate::errors::AppResult;
use crate::models::{DailyRecord, YearMonth};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params_from_iter};
use std::collections::BTreeSet;

fn column_list() -> String {
    COLUMNS
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn map_row(row: &Row) -> rusqlite::Result<RecordRow> {
    let mut cells = Vec::with_capacity(COLUMNS.len());
    for i in 0..COLUMNS.len() {
        let v: Option<String> = row.get(i)?;
        cells.push(v.unwrap_or_default());
    }
    RecordRow::from_cells(cells).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Raw row for one date key, `None` when absent.
pub fn load_row(conn: &Connection, date_key: &str) -> AppResult<Option<RecordRow>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {} FROM {TABLE} WHERE date = ?1 LIMIT 1",
        column_list()
    ))?;

    Ok(stmt.query_row([date_key], map_row).optional()?)
}

/// Typed record for one date, `None` when no row exists.
pub fn load_record(conn: &Connection, date: &NaiveDate) -> AppResult<Option<DailyRecord>> {
    let key = date.format("%Y-%m-%d").to_string();
    Ok(load_row(conn, &key)?.and_then(|r| r.to_record()))
}

/// Every stored row. Rows with a parseable date come first, ascending by date;
/// rows whose date key does not parse follow in storage order.
pub fn load_rows(conn: &Connection) -> AppResult<Vec<RecordRow>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {} FROM {TABLE} ORDER BY rowid ASC",
        column_list()
    ))?;

    let rows = stmt.query_map([], map_row)?;

    let mut dated: Vec<(NaiveDate, RecordRow)> = Vec::new();
    let mut corrupt: Vec<RecordRow> = Vec::new();
    for r in rows {
        let r = r?;
        match r.parsed_date() {
            Some(d) => dated.push((d, r)),
            None => corrupt.push(r),
        }
    }

    dated.sort_by_key(|(d, _)| *d);

    let mut out: Vec<RecordRow> = dated.into_iter().map(|(_, r)| r).collect();
    out.extend(corrupt);
    Ok(out)
}

/// Typed records ascending by date. Corrupt date keys are skipped, never raised.
pub fn load_all_records(conn: &Connection) -> AppResult<Vec<DailyRecord>> {
    Ok(load_rows(conn)?
        .iter()
        .filter_map(RecordRow::to_record)
        .collect())
}

/// Typed records of one month, ascending by date.
pub fn load_month_records(conn: &Connection, month: YearMonth) -> AppResult<Vec<DailyRecord>> {
    Ok(load_all_records(conn)?
        .into_iter()
        .filter(|r| month.contains(r.date))
        .collect())
}

/// Months that hold at least one record, ascending.
pub fn load_months(conn: &Connection) -> AppResult<Vec<YearMonth>> {
    let months: BTreeSet<YearMonth> = load_all_records(conn)?
        .iter()
        .map(|r| YearMonth::of(r.date))
        .collect();
    Ok(months.into_iter().collect())
}

/// Insert or replace the whole row keyed by its date. Idempotent; the last write wins.
pub fn upsert_row(conn: &Connection, row: &RecordRow) -> AppResult<()> {
    let placeholders: Vec<String> = (1..=COLUMNS.len()).map(|i| format!("?{i}")).collect();
    let update_set: Vec<String> = COLUMNS
        .iter()
        .filter(|c| **c != "date")
        .map(|c| format!("\"{c}\" = excluded.\"{c}\""))
        .collect();

    let mut stmt = conn.prepare_cached(&format!(
        "INSERT INTO {TABLE} ({})
         VALUES ({})
         ON CONFLICT(date) DO UPDATE SET {}",
        column_list(),
        placeholders.join(", "),
        update_set.join(", ")
    ))?;

    stmt.execute(params_from_iter(row.cells().iter()))?;
    Ok(())
}

pub fn upsert_record(conn: &Connection, record: &DailyRecord) -> AppResult<()> {
    upsert_row(conn, &RecordRow::from(record))
}

/// Delete the rows of the given date keys in one transaction.
/// Keys without a row are ignored. Returns how many rows went away.
pub fn delete_records(conn: &Connection, date_keys: &BTreeSet<String>) -> AppResult<usize> {
    if date_keys.is_empty() {
        return Ok(0);
    }

    let tx = conn.unchecked_transaction()?;
    let mut deleted = 0;
    {
        let mut stmt = tx.prepare_cached(&format!("DELETE FROM {TABLE} WHERE date = ?1"))?;
        for k in date_keys {
            deleted += stmt.execute([k])?;
        }
    }
    tx.commit()?;

    Ok(deleted)
}

/// Delete every row whose date falls in `month`, whatever the spelling of its key
/// (`2025-9-5` as well as `2025-09-05`). Rows with unreadable keys are kept.
///
/// Runs on the caller's connection or transaction; it opens none of its own.
pub fn delete_month(conn: &Connection, month: YearMonth) -> AppResult<usize> {
    let keys: Vec<String> = load_rows(conn)?
        .iter()
        .filter(|r| r.parsed_date().is_some_and(|d| month.contains(d)))
        .map(|r| r.date_key().to_string())
        .collect();

    let mut stmt = conn.prepare_cached(&format!("DELETE FROM {TABLE} WHERE date = ?1"))?;
    let mut deleted = 0;
    for k in &keys {
        deleted += stmt.execute([k])?;
    }
    Ok(deleted)
}

pub fn count_records(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row(&format!("SELECT COUNT(*) FROM {TABLE}"), [], |row| {
        row.get(0)
    })?)
}
