use crate::models::record::OVER_THRESHOLD_HOURS;
use crate::models::{ClientRevenue, DailyRecord};
use chrono::NaiveDate;

/// Parsed values of the day form. Absent hours count as 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayInput {
    pub total_hours: Option<f64>,
    pub flex_hours: Option<f64>,
    pub fresh_hours: Option<f64>,
    pub clients: ClientRevenue,
    pub memo: String,
}

/// `max(0, total - a - b)`. Category hours above the total are clamped, not rejected.
pub fn other_hours(total: f64, flex: f64, fresh: f64) -> f64 {
    (total - flex - fresh).max(0.0)
}

/// `floor(sales / hours)`, or `None` when no hours were worked
pub fn hourly_rate(sales: i64, hours: f64) -> Option<i64> {
    if hours > 0.0 {
        Some((sales as f64 / hours).floor() as i64)
    } else {
        None
    }
}

pub fn is_over_threshold(hours: f64) -> bool {
    hours >= OVER_THRESHOLD_HOURS
}

pub fn has_sales_without_hours(sales: i64, hours: f64) -> bool {
    sales > 0 && hours <= 0.0
}

/// Build the full record for one day from the form values.
pub fn derive_record(date: NaiveDate, input: &DayInput) -> DailyRecord {
    let total_hours = input.total_hours.unwrap_or(0.0);
    let flex_hours = input.flex_hours.unwrap_or(0.0);
    let fresh_hours = input.fresh_hours.unwrap_or(0.0);
    let total_sales = input.clients.total();

    DailyRecord {
        date,
        total_sales,
        total_hours,
        flex_hours,
        fresh_hours,
        other_hours: other_hours(total_hours, flex_hours, fresh_hours),
        hourly_rate: hourly_rate(total_sales, total_hours),
        over_threshold: is_over_threshold(total_hours),
        sales_without_hours: has_sales_without_hours(total_sales, total_hours),
        clients: input.clients,
        memo: input.memo.clone(),
    }
}
