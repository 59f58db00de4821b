use crate::models::client::ClientRevenue;
use chrono::NaiveDate;

/// Days at or above this many hours count as "5h+" days.
pub const OVER_THRESHOLD_HOURS: f64 = 5.0;

/// Typed view of one calendar day. At most one record exists per date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub total_sales: i64,
    pub total_hours: f64,
    /// Category A ("Flex") hours
    pub flex_hours: f64,
    /// Category B ("Fresh") hours
    pub fresh_hours: f64,
    pub other_hours: f64,
    /// `None` when no hours were worked: "no data" is not a zero rate.
    pub hourly_rate: Option<i64>,
    pub over_threshold: bool,
    /// Revenue recorded with no hours. Flagged, never rejected.
    pub sales_without_hours: bool,
    pub clients: ClientRevenue,
    pub memo: String,
}

impl DailyRecord {
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Unfloored revenue per hour, `None` for zero-hour days
    pub fn exact_hourly(&self) -> Option<f64> {
        (self.total_hours > 0.0).then(|| self.total_sales as f64 / self.total_hours)
    }
}
