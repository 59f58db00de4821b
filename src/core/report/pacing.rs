use crate::models::YearMonth;
use chrono::{Days, NaiveDate};

/// At most this many upcoming days are laid out in the plan.
pub const PLAN_HORIZON_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDay {
    pub date: NaiveDate,
    /// `true` → aim for a 5h+ day, `false` → light day or rest
    pub push: bool,
}

/// Remainder-of-month plan for reaching the monthly target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacingPlan {
    pub monthly_target: i64,
    pub sum_sales: i64,
    pub target_met: bool,
    pub remaining_sales: i64,
    /// Days strictly after today up to the month end
    pub remaining_days: i64,
    /// Ceiling of `remaining_sales / remaining_days`; `None` when no days remain
    pub per_day_need: Option<i64>,
    /// Expected revenue of one 5h+ day (never below 1)
    pub plan_daily_rate: i64,
    pub days_needed_5h: i64,
    pub schedule: Vec<PlanDay>,
}

/// Ceiling division for a non-negative numerator and a positive divisor.
fn ceil_div(a: i64, b: i64) -> i64 {
    let q = a.max(0).unsigned_abs().div_ceil(b.max(1).unsigned_abs());
    i64::try_from(q).unwrap_or(i64::MAX)
}

impl PacingPlan {
    pub fn compute(
        month: YearMonth,
        today: NaiveDate,
        sum_sales: i64,
        avg_5h_sales: i64,
        daily_target: i64,
        monthly_target: i64,
    ) -> Self {
        let remaining_sales = monthly_target.saturating_sub(sum_sales).max(0);
        let remaining_days = (month.last_day() - today).num_days().max(0);

        let per_day_need = (remaining_days > 0).then(|| ceil_div(remaining_sales, remaining_days));

        let plan_daily_rate = if avg_5h_sales > 0 {
            avg_5h_sales
        } else {
            daily_target
        }
        .max(1);

        let days_needed_5h = if remaining_sales > 0 {
            ceil_div(remaining_sales, plan_daily_rate).min(remaining_days)
        } else {
            0
        };

        let schedule = (1..=remaining_days.min(PLAN_HORIZON_DAYS))
            .filter_map(|i| {
                today.checked_add_days(Days::new(i as u64)).map(|date| PlanDay {
                    date,
                    push: i <= days_needed_5h,
                })
            })
            .collect();

        Self {
            monthly_target,
            sum_sales,
            target_met: sum_sales >= monthly_target,
            remaining_sales,
            remaining_days,
            per_day_need,
            plan_daily_rate,
            days_needed_5h,
            schedule,
        }
    }
}
