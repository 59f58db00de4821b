// src/export/logic.rs

use crate::db::log::{OP_IMPORT, ttlog_soft};
use crate::db::models::RecordRow;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_month, load_rows, upsert_row};
use crate::errors::AppResult;
use crate::export::csv_io::{read_csv, write_csv};
use crate::export::fs_utils::{ensure_absolute, ensure_writable};
use crate::export::json::write_json;
use crate::export::range::{Bounds, parse_range};
use crate::export::{ExportFormat, notify_export_success};
use crate::models::YearMonth;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the `records` table.
pub struct ExportLogic;

impl ExportLogic {
    /// Export raw rows in the stable column order.
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"`, `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or `start:end`
    ///
    /// Rows whose date key does not parse are only included in an unbounded export.
    /// Returns the number of exported rows.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_absolute(path)?;

        let bounds = parse_range(range)?;
        let rows = Self::select_rows(pool, bounds)?;

        if rows.is_empty() {
            warning("No records found for the selected range. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => write_json(path, &rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), rows.len(), path);
        Ok(rows.len())
    }

    pub fn select_rows(pool: &DbPool, bounds: Bounds) -> AppResult<Vec<RecordRow>> {
        let rows = load_rows(&pool.conn)?;
        Ok(match bounds {
            None => rows,
            Some((start, end)) => rows
                .into_iter()
                .filter(|r| r.parsed_date().is_some_and(|d| d >= start && d <= end))
                .collect(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    /// Rows removed first by a full-month replace
    pub replaced: usize,
}

pub struct ImportLogic;

impl ImportLogic {
    /// Insert or replace rows by date from a CSV file.
    ///
    /// With `month`, the file must hold only that month and every existing row of the
    /// month is deleted first. The whole import runs in one transaction: a malformed
    /// file or a failing write leaves the table as it was.
    pub fn import(pool: &mut DbPool, file: &str, month: Option<YearMonth>) -> AppResult<ImportSummary> {
        let rows = read_csv(Path::new(file), month)?;

        let summary = pool.with_conn(|conn| {
            let tx = conn.transaction()?;

            let replaced = match month {
                Some(m) => delete_month(&tx, m)?,
                None => 0,
            };
            for r in &rows {
                upsert_row(&tx, r)?;
            }

            tx.commit()?;
            Ok(ImportSummary {
                imported: rows.len(),
                replaced,
            })
        })?;

        ttlog_soft(
            &pool.conn,
            OP_IMPORT,
            &month.map(|m| m.to_string()).unwrap_or_else(|| file.to_string()),
            &format!(
                "Imported {} row(s), replaced {} row(s)",
                summary.imported, summary.replaced
            ),
        );

        Ok(summary)
    }
}
