// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::models::YearMonth;
use chrono::NaiveDate;

/// Inclusive date bounds, `None` meaning "everything".
pub type Bounds = Option<(NaiveDate, NaiveDate)>;

fn bounds_of(part: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let part = part.trim();
    match part.len() {
        // YYYY
        4 => {
            let y: i32 = part
                .parse()
                .map_err(|_| AppError::Export(format!("invalid year: {part}")))?;
            let first = YearMonth::new(y, 1)?.first_day();
            let last = YearMonth::new(y, 12)?.last_day();
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let m = YearMonth::parse(part)?;
            Ok((m.first_day(), m.last_day()))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(part, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(part.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::Export(format!("unsupported --range format: {part}"))),
    }
}

/// Parse `--range`.
///
/// Supports `all`, `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and `start:end` built from
/// any two of those (start taken from the first, end from the second).
pub fn parse_range(r: Option<&str>) -> AppResult<Bounds> {
    let r = match r {
        None => return Ok(None),
        Some(r) if r.trim().eq_ignore_ascii_case("all") => return Ok(None),
        Some(r) => r,
    };

    let (start, end) = match r.split_once(':') {
        Some((s, e)) => (bounds_of(s)?.0, bounds_of(e)?.1),
        None => bounds_of(r)?,
    };

    if start > end {
        return Err(AppError::Export(format!("range start after end: {r}")));
    }
    Ok(Some((start, end)))
}
