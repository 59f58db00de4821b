//! Monthly report engine.
//!
//! Pure: takes the full record set, a target month and the reference "today",
//! returns the report text. The mode (future / current / past) depends only on how
//! the target month compares to the month of `today`.

pub mod pacing;
pub mod ranking;
mod render;
pub mod stats;
pub mod targets;

use crate::models::{DailyRecord, YearMonth};
use crate::utils::date;
use chrono::NaiveDate;
use pacing::PacingPlan;
use ranking::Ranking;
use stats::MonthStats;
use targets::MONTHLY_TARGET;

/// Returned when the target month holds no records.
pub const NO_DATA: &str = "No data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Month after the current one: header and targets only
    Future,
    /// The running month: full report plus the pacing plan
    Current,
    Past,
}

impl ReportMode {
    pub fn select(month: YearMonth, today: NaiveDate) -> Self {
        let now = YearMonth::of(today);
        if month > now {
            ReportMode::Future
        } else if month == now {
            ReportMode::Current
        } else {
            ReportMode::Past
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub today: NaiveDate,
    pub monthly_target: i64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            today: date::today(),
            monthly_target: MONTHLY_TARGET,
        }
    }
}

/// Everything the rendered report is made of.
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub mode: ReportMode,
    pub monthly_target: i64,
    pub stats: MonthStats,
    /// Only for the current month
    pub pacing: Option<PacingPlan>,
    pub ranking: Ranking,
}

impl MonthlyReport {
    /// `None` when `month` holds no records.
    pub fn compute(records: &[DailyRecord], month: YearMonth, opts: &ReportOptions) -> Option<Self> {
        let in_month: Vec<DailyRecord> = records
            .iter()
            .filter(|r| month.contains(r.date))
            .cloned()
            .collect();

        if in_month.is_empty() {
            return None;
        }

        let mode = ReportMode::select(month, opts.today);
        let stats = MonthStats::compute(&in_month, month);

        let pacing = (mode == ReportMode::Current).then(|| {
            PacingPlan::compute(
                month,
                opts.today,
                stats.overall.sales,
                stats.avg_5h_sales,
                stats.targets.daily_target,
                opts.monthly_target,
            )
        });

        let ranking = if mode == ReportMode::Future {
            Ranking::default()
        } else {
            Ranking::compute(&in_month)
        };

        Some(Self {
            mode,
            monthly_target: opts.monthly_target,
            stats,
            pacing,
            ranking,
        })
    }

    pub fn render(&self) -> String {
        match self.mode {
            ReportMode::Future => render::future(self),
            ReportMode::Current | ReportMode::Past => render::full(self),
        }
    }
}

/// Build the report text for `month`, or [`NO_DATA`].
pub fn build_month_report(records: &[DailyRecord], month: YearMonth, opts: &ReportOptions) -> String {
    MonthlyReport::compute(records, month, opts)
        .map(|r| r.render())
        .unwrap_or_else(|| NO_DATA.to_string())
}
