//! CSV with the stable column set: one header row, every value as text.

use crate::db::models::{COLUMNS, RecordRow, column_index};
use crate::errors::{AppError, AppResult};
use crate::models::YearMonth;
use chrono::NaiveDate;
use csv::{ReaderBuilder, Writer};
use std::path::Path;

pub fn write_csv(path: &Path, rows: &[RecordRow]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(COLUMNS)?;
    for r in rows {
        wtr.write_record(r.cells())?;
    }

    wtr.flush()?;
    Ok(())
}

/// Read and validate a CSV file. Nothing is written anywhere; the caller gets
/// either every row or an integrity error.
///
/// - the header must contain `date` and only known columns (any order, any subset)
/// - every row needs a valid date; keys are rewritten to `YYYY-MM-DD`
/// - with `month`, every date must fall inside that month
pub fn read_csv(path: &Path, month: Option<YearMonth>) -> AppResult<Vec<RecordRow>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let headers = rdr.headers()?.clone();
    let mut positions: Vec<usize> = Vec::with_capacity(headers.len());
    for h in headers.iter() {
        let idx = column_index(h.trim())
            .ok_or_else(|| AppError::Integrity(format!("unknown column '{}'", h)))?;
        positions.push(idx);
    }
    if !positions.contains(&0) {
        return Err(AppError::Integrity("missing required column 'date'".into()));
    }

    let mut rows = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        // header is line 1
        let line = line + 2;

        let mut cells = vec![String::new(); COLUMNS.len()];
        for (value, idx) in rec.iter().zip(&positions) {
            cells[*idx] = value.to_string();
        }
        let raw = cells[0].trim();
        if raw.is_empty() {
            return Err(AppError::Integrity(format!("line {line}: missing date")));
        }

        // one calendar day, one key: `2025-9-5` is stored as `2025-09-05`
        let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| AppError::Integrity(format!("line {line}: invalid date '{raw}'")))?;

        if let Some(m) = month
            && !m.contains(day)
        {
            return Err(AppError::Integrity(format!(
                "line {line}: date '{raw}' is outside {m}"
            )));
        }

        cells[0] = day.format("%Y-%m-%d").to_string();
        rows.push(RecordRow::from_cells(cells)?);
    }

    Ok(rows)
}
