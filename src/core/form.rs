//! In-progress values of the day form and the "unsaved changes" signature.
//!
//! The signature is a UI affordance only: it tells the caller whether the current
//! inputs differ from what was last loaded or saved. It is not a lock.

use crate::core::calculator::derive::DayInput;
use crate::core::calculator::normalize::{
    digits_only_amount, parse_number_decimal, parse_number_strict,
};
use crate::db::models::RecordRow;
use crate::errors::{AppError, AppResult};
use crate::models::{Client, ClientRevenue};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub total_hours: String,
    pub flex_hours: String,
    pub fresh_hours: String,
    pub memo: String,
    pub clients: ClientRevenue,
    loaded_sig: String,
}

/// Canonical shape compared between load/save and now.
#[derive(Serialize)]
struct Payload<'a> {
    total_hours: &'a str,
    flex_hours: &'a str,
    fresh_hours: &'a str,
    memo: &'a str,
    clients: BTreeMap<&'static str, i64>,
}

impl FormState {
    /// Empty form (no record for the selected date). The blank state counts as loaded.
    pub fn blank() -> Self {
        let mut f = Self::default();
        f.mark_saved();
        f
    }

    /// Form filled from a stored row: hour cells as text, client cells as amounts.
    pub fn from_row(row: &RecordRow) -> Self {
        let clients: ClientRevenue = Client::ALL
            .into_iter()
            .map(|c| (c, parse_number_strict(row.get(c.column())).unwrap_or(0)))
            .collect();

        let mut f = Self {
            total_hours: row.get("total_hours").to_string(),
            flex_hours: row.get("flex_hours").to_string(),
            fresh_hours: row.get("fresh_hours").to_string(),
            memo: row.get("memo").to_string(),
            clients,
            loaded_sig: String::new(),
        };
        f.mark_saved();
        f
    }

    /// Load the form for a date: the stored row when there is one, blank otherwise.
    pub fn load(row: Option<&RecordRow>) -> Self {
        row.map(Self::from_row).unwrap_or_else(Self::blank)
    }

    /// Empty every input, keeping the loaded signature.
    pub fn clear(&mut self) {
        self.total_hours.clear();
        self.flex_hours.clear();
        self.fresh_hours.clear();
        self.memo.clear();
        self.clients = ClientRevenue::default();
    }

    /// Amount box semantics: only the digits of `text` count, none at all → 0.
    /// An amount too large to add up safely is rejected and the form is left as it was.
    pub fn set_client_text(&mut self, client: Client, text: &str) -> AppResult<()> {
        let amount = digits_only_amount(text).ok_or_else(|| {
            AppError::InvalidAmount(format!("{}={}", client.column(), text.trim()))
        })?;
        self.clients.set(client, amount);
        Ok(())
    }

    pub fn signature(&self) -> String {
        let payload = Payload {
            total_hours: self.total_hours.trim(),
            flex_hours: self.flex_hours.trim(),
            fresh_hours: self.fresh_hours.trim(),
            memo: self.memo.trim(),
            clients: self.clients.iter().map(|(c, v)| (c.column(), v)).collect(),
        };
        // a struct of strings and integers always serializes
        serde_json::to_string(&payload).unwrap_or_default()
    }

    /// Record the current inputs as the saved state.
    pub fn mark_saved(&mut self) {
        self.loaded_sig = self.signature();
    }

    pub fn is_dirty(&self) -> bool {
        !self.loaded_sig.is_empty() && self.signature() != self.loaded_sig
    }

    /// Parsed values for the derivation step. Unparseable hours read as absent.
    pub fn to_input(&self) -> DayInput {
        DayInput {
            total_hours: parse_number_decimal(&self.total_hours),
            flex_hours: parse_number_decimal(&self.flex_hours),
            fresh_hours: parse_number_decimal(&self.fresh_hours),
            clients: self.clients,
            memo: self.memo.clone(),
        }
    }
}
