use crate::core::calculator::derive::is_over_threshold;
use crate::core::report::targets::{HourlyGrade, Season, SeasonTargets};
use crate::models::{Client, DailyRecord, YearMonth};

/// Saturating sum, so a corrupt cell can only distort a figure, never abort the report.
fn sum_amounts(values: impl Iterator<Item = i64>) -> i64 {
    values.fold(0, i64::saturating_add)
}

fn floor_rate(sales: i64, hours: f64) -> i64 {
    if hours > 0.0 {
        (sales as f64 / hours).floor() as i64
    } else {
        0
    }
}

/// Sales, hours and floored hourly rate of one category (or of the whole month).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTotals {
    pub sales: i64,
    pub hours: f64,
    pub hourly: i64,
}

impl CategoryTotals {
    fn new(sales: i64, hours: f64) -> Self {
        Self {
            sales,
            hours,
            hourly: floor_rate(sales, hours),
        }
    }
}

/// Aggregates of one month of records.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthStats {
    pub month: YearMonth,
    pub overall: CategoryTotals,
    pub flex: CategoryTotals,
    pub fresh: CategoryTotals,
    pub other: CategoryTotals,

    /// Days with hours > 0
    pub work_days: usize,
    pub avg_workday_hours: f64,
    pub avg_calendar_hours: f64,

    pub season: Season,
    pub targets: SeasonTargets,
    pub days_5h: usize,
    /// Floored mean revenue of the 5h+ days, 0 when there are none
    pub avg_5h_sales: i64,
    pub daily_target_met: bool,
    pub hourly_grade: HourlyGrade,
}

impl MonthStats {
    /// `records` must already be restricted to `month`.
    pub fn compute(records: &[DailyRecord], month: YearMonth) -> Self {
        let sum_sales = sum_amounts(records.iter().map(|r| r.total_sales));
        let sum_hours: f64 = records.iter().map(|r| r.total_hours).sum();

        let flex_sales = sum_amounts(records.iter().map(|r| r.clients.get(Client::Afrex)));
        let fresh_sales = sum_amounts(records.iter().map(|r| r.clients.get(Client::Afresh)));
        let flex_hours: f64 = records.iter().map(|r| r.flex_hours).sum();
        let fresh_hours: f64 = records.iter().map(|r| r.fresh_hours).sum();

        let other_sales = sum_sales
            .saturating_sub(flex_sales)
            .saturating_sub(fresh_sales)
            .max(0);
        let other_hours = (sum_hours - flex_hours - fresh_hours).max(0.0);

        let work_days = records.iter().filter(|r| r.total_hours > 0.0).count();
        let avg_workday_hours = if work_days > 0 {
            sum_hours / work_days as f64
        } else {
            0.0
        };
        let avg_calendar_hours = sum_hours / month.days_in_month() as f64;

        let season = Season::of_month(month.month);
        let targets = season.targets();

        let sales_5h: Vec<i64> = records
            .iter()
            .filter(|r| is_over_threshold(r.total_hours))
            .map(|r| r.total_sales)
            .collect();
        let days_5h = sales_5h.len();
        let avg_5h_sales = if days_5h > 0 {
            (sum_amounts(sales_5h.iter().copied()) as f64 / days_5h as f64).floor() as i64
        } else {
            0
        };

        let overall = CategoryTotals::new(sum_sales, sum_hours);

        Self {
            month,
            overall,
            flex: CategoryTotals::new(flex_sales, flex_hours),
            fresh: CategoryTotals::new(fresh_sales, fresh_hours),
            other: CategoryTotals::new(other_sales, other_hours),
            work_days,
            avg_workday_hours,
            avg_calendar_hours,
            season,
            targets,
            days_5h,
            avg_5h_sales,
            daily_target_met: avg_5h_sales >= targets.daily_target,
            hourly_grade: targets.tiers.grade(overall.hourly),
        }
    }
}
