use crate::core::calculator::derive::derive_record;
use crate::core::form::FormState;
use crate::db::log::{OP_ADD, OP_EDIT, ttlog_soft};
use crate::db::models::RecordRow;
use crate::db::pool::DbPool;
use crate::db::queries::{load_row, upsert_record};
use crate::errors::AppResult;
use crate::models::{Client, DailyRecord};
use chrono::NaiveDate;

/// Edits requested for one day. `None` leaves the loaded value as it is.
#[derive(Debug, Clone, Default)]
pub struct DayEdits {
    pub total_hours: Option<String>,
    pub flex_hours: Option<String>,
    pub fresh_hours: Option<String>,
    pub memo: Option<String>,
    pub clients: Vec<(Client, String)>,
    /// Start from a blank form instead of the stored row
    pub reset: bool,
}

#[derive(Debug, Clone)]
pub enum SaveOutcome {
    Saved(DailyRecord),
    /// The inputs match what is stored; nothing was written
    Unchanged(DailyRecord),
}

pub struct AddLogic;

impl AddLogic {
    /// Current form for a date: the stored row, or blank.
    pub fn load_form(pool: &DbPool, date: NaiveDate) -> AppResult<(FormState, Option<RecordRow>)> {
        let key = date.format("%Y-%m-%d").to_string();
        let row = load_row(&pool.conn, &key)?;
        Ok((FormState::load(row.as_ref()), row))
    }

    pub fn apply_edits(form: &mut FormState, edits: &DayEdits) -> AppResult<()> {
        if edits.reset {
            form.clear();
        }
        if let Some(v) = &edits.total_hours {
            form.total_hours = v.clone();
        }
        if let Some(v) = &edits.flex_hours {
            form.flex_hours = v.clone();
        }
        if let Some(v) = &edits.fresh_hours {
            form.fresh_hours = v.clone();
        }
        if let Some(v) = &edits.memo {
            form.memo = v.clone();
        }
        for (client, text) in &edits.clients {
            form.set_client_text(*client, text)?;
        }
        Ok(())
    }

    /// Load, edit, and save one day. The whole row is rewritten on every save.
    pub fn apply(pool: &mut DbPool, date: NaiveDate, edits: &DayEdits) -> AppResult<SaveOutcome> {
        let (mut form, existing) = Self::load_form(pool, date)?;

        Self::apply_edits(&mut form, edits)?;

        let record = derive_record(date, &form.to_input());

        if existing.is_some() && !form.is_dirty() {
            return Ok(SaveOutcome::Unchanged(record));
        }

        upsert_record(&pool.conn, &record)?;

        ttlog_soft(
            &pool.conn,
            if existing.is_some() { OP_EDIT } else { OP_ADD },
            &record.date_key(),
            &format!(
                "Saved day: sales={} hours={}",
                record.total_sales, record.total_hours
            ),
        );

        Ok(SaveOutcome::Saved(record))
    }
}
