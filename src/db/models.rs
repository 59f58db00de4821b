//! Stored representation of the `records` table.
//! Every column is TEXT; `RecordRow` keeps the cells verbatim so bulk
//! export/import round-trips losslessly, `DailyRecord` is the typed view.

use crate::core::calculator::normalize::{parse_number_decimal, parse_number_strict, to_stored_cell};
use crate::errors::{AppError, AppResult};
use crate::models::{Client, ClientRevenue, DailyRecord};
use chrono::NaiveDate;

pub const TABLE: &str = "records";

/// Stable column order. Exports and imports rely on it.
pub const COLUMNS: [&str; 21] = [
    "date",
    "total_sales",
    "total_hours",
    "flex_hours",
    "fresh_hours",
    "other_hours",
    "hourly_rate",
    "over_5h",
    "warning",
    "u",
    "de",
    "r",
    "w",
    "menu",
    "shonpi",
    "afrex",
    "afresh",
    "hacobell",
    "pickg",
    "other",
    "memo",
];

pub const OVER_5H_MARK: &str = "5h+";
pub const WARNING_MARK: &str = "sales without hours";

pub fn column_index(name: &str) -> Option<usize> {
    COLUMNS.iter().position(|c| *c == name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    cells: Vec<String>,
}

impl RecordRow {
    /// Build a row from cells in `COLUMNS` order.
    pub fn from_cells(cells: Vec<String>) -> AppResult<Self> {
        if cells.len() != COLUMNS.len() {
            return Err(AppError::Integrity(format!(
                "expected {} columns, got {}",
                COLUMNS.len(),
                cells.len()
            )));
        }
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn get(&self, column: &str) -> &str {
        column_index(column)
            .map(|i| self.cells[i].as_str())
            .unwrap_or("")
    }

    pub fn date_key(&self) -> &str {
        &self.cells[0]
    }

    /// `None` when the date key is not an ISO date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date_key().trim(), "%Y-%m-%d").ok()
    }

    /// Typed view. Blank numeric cells read as zero, a blank hourly rate stays absent.
    pub fn to_record(&self) -> Option<DailyRecord> {
        let date = self.parsed_date()?;
        let int = |c: &str| parse_number_strict(self.get(c)).unwrap_or(0);
        let dec = |c: &str| parse_number_decimal(self.get(c)).unwrap_or(0.0);

        let clients: ClientRevenue = Client::ALL
            .into_iter()
            .map(|c| (c, int(c.column())))
            .collect();

        Some(DailyRecord {
            date,
            total_sales: int("total_sales"),
            total_hours: dec("total_hours"),
            flex_hours: dec("flex_hours"),
            fresh_hours: dec("fresh_hours"),
            other_hours: dec("other_hours"),
            hourly_rate: parse_number_strict(self.get("hourly_rate")),
            over_threshold: !self.get("over_5h").trim().is_empty(),
            sales_without_hours: !self.get("warning").trim().is_empty(),
            clients,
            memo: self.get("memo").to_string(),
        })
    }
}

impl From<&DailyRecord> for RecordRow {
    fn from(r: &DailyRecord) -> Self {
        let mut cells = vec![
            r.date_key(),
            to_stored_cell(Some(r.total_sales)),
            to_stored_cell(Some(r.total_hours)),
            to_stored_cell(Some(r.flex_hours)),
            to_stored_cell(Some(r.fresh_hours)),
            to_stored_cell(Some(r.other_hours)),
            to_stored_cell(r.hourly_rate),
            if r.over_threshold { OVER_5H_MARK } else { "" }.to_string(),
            if r.sales_without_hours { WARNING_MARK } else { "" }.to_string(),
        ];
        cells.extend(Client::ALL.iter().map(|c| to_stored_cell(Some(r.clients.get(*c)))));
        cells.push(r.memo.clone());

        Self { cells }
    }
}
