use crate::models::{Client, DailyRecord};
use chrono::NaiveDate;

/// Length of the best and worst lists.
pub const RANK_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedDay {
    pub date: NaiveDate,
    pub sales: i64,
    pub hours: f64,
    /// Unfloored revenue per hour, used for ordering
    pub exact_hourly: f64,
    pub hourly: i64,
    /// Nonzero clients, largest first
    pub breakdown: Vec<(Client, i64)>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ranking {
    /// Highest hourly rate first
    pub top: Vec<RankedDay>,
    /// Lowest hourly rate first
    pub bottom: Vec<RankedDay>,
}

impl Ranking {
    /// Zero-hour days are left out of both lists. Equal rates keep date order.
    pub fn compute(records: &[DailyRecord]) -> Self {
        let mut days: Vec<RankedDay> = records
            .iter()
            .filter_map(|r| {
                let exact = r.exact_hourly()?;
                Some(RankedDay {
                    date: r.date,
                    sales: r.total_sales,
                    hours: r.total_hours,
                    exact_hourly: exact,
                    hourly: exact.floor() as i64,
                    breakdown: r.clients.nonzero_desc(),
                })
            })
            .collect();

        days.sort_by(|a, b| a.date.cmp(&b.date));

        let mut top = days.clone();
        top.sort_by(|a, b| b.exact_hourly.total_cmp(&a.exact_hourly));
        top.truncate(RANK_SIZE);

        let mut bottom = days;
        bottom.sort_by(|a, b| a.exact_hourly.total_cmp(&b.exact_hourly));
        bottom.truncate(RANK_SIZE);

        Self { top, bottom }
    }
}
