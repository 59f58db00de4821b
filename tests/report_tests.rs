use chrono::NaiveDate;
use rdaybook::core::calculator::derive::{DayInput, derive_record};
use rdaybook::core::report::pacing::PacingPlan;
use rdaybook::core::report::ranking::Ranking;
use rdaybook::core::report::stats::MonthStats;
use rdaybook::core::report::targets::{HourlyGrade, MONTHLY_TARGET, Season};
use rdaybook::core::report::{
    MonthlyReport, NO_DATA, ReportMode, ReportOptions, build_month_report,
};
use rdaybook::models::{Client, ClientRevenue, DailyRecord, YearMonth};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(d: NaiveDate, clients: &[(Client, i64)], hours: f64) -> DailyRecord {
    derive_record(
        d,
        &DayInput {
            total_hours: Some(hours),
            clients: clients.iter().copied().collect::<ClientRevenue>(),
            ..DayInput::default()
        },
    )
}

fn opts(today: NaiveDate) -> ReportOptions {
    ReportOptions {
        today,
        monthly_target: MONTHLY_TARGET,
    }
}

fn sept() -> YearMonth {
    YearMonth::new(2025, 9).unwrap()
}

#[test]
fn test_monthly_aggregation() {
    let records = vec![
        record(date(2025, 9, 1), &[(Client::U, 10000)], 4.0),
        record(date(2025, 9, 2), &[(Client::U, 20000)], 6.0),
    ];

    let s = MonthStats::compute(&records, sept());
    assert_eq!(s.overall.sales, 30000);
    assert_eq!(s.overall.hours, 10.0);
    assert_eq!(s.overall.hourly, 3000);
    assert_eq!(s.work_days, 2);
    assert_eq!(s.avg_workday_hours, 5.0);
    assert!((s.avg_calendar_hours - 10.0 / 30.0).abs() < 1e-9);

    // one 5h+ day
    assert_eq!(s.days_5h, 1);
    assert_eq!(s.avg_5h_sales, 20000);
    assert_eq!(s.season, Season::Summer);
    assert!(s.daily_target_met);
    assert_eq!(s.hourly_grade, HourlyGrade::Excellent);
}

#[test]
fn test_category_split() {
    let mut flex_day = record(
        date(2025, 9, 3),
        &[(Client::Afrex, 6000), (Client::U, 4000)],
        5.0,
    );
    flex_day.flex_hours = 3.0;
    let mut fresh_day = record(date(2025, 9, 4), &[(Client::Afresh, 3000)], 2.0);
    fresh_day.fresh_hours = 2.0;

    let s = MonthStats::compute(&[flex_day, fresh_day], sept());

    assert_eq!(s.flex.sales, 6000);
    assert_eq!(s.flex.hours, 3.0);
    assert_eq!(s.flex.hourly, 2000);
    assert_eq!(s.fresh.sales, 3000);
    assert_eq!(s.fresh.hourly, 1500);
    assert_eq!(s.other.sales, 4000);
    assert_eq!(s.other.hours, 2.0);
    assert_eq!(s.other.hourly, 2000);
}

#[test]
fn test_empty_month_is_no_data() {
    let records = vec![record(date(2025, 8, 1), &[(Client::U, 1000)], 1.0)];
    assert_eq!(build_month_report(&records, sept(), &opts(date(2025, 9, 10))), NO_DATA);
    assert_eq!(build_month_report(&[], sept(), &opts(date(2025, 9, 10))), NO_DATA);
}

#[test]
fn test_mode_selection() {
    let today = date(2025, 9, 10);
    assert_eq!(ReportMode::select(YearMonth::new(2025, 10).unwrap(), today), ReportMode::Future);
    assert_eq!(ReportMode::select(sept(), today), ReportMode::Current);
    assert_eq!(ReportMode::select(YearMonth::new(2024, 12).unwrap(), today), ReportMode::Past);
}

#[test]
fn test_future_month_shows_targets_only() {
    let records = vec![record(date(2026, 1, 5), &[(Client::U, 50000)], 8.0)];
    let month = YearMonth::new(2026, 1).unwrap();

    let report = MonthlyReport::compute(&records, month, &opts(date(2025, 12, 20))).unwrap();
    assert_eq!(report.mode, ReportMode::Future);
    assert!(report.pacing.is_none());

    let text = report.render();
    assert!(text.contains("[2026-01 monthly report]"));
    assert!(text.contains("[Targets]"));
    assert!(text.contains("Monthly target: 400,000"));
    assert!(text.contains("winter"));
    assert!(text.contains("20,000"));
    assert!(text.contains("pass 3,000 / good 3,500 / excellent 4,000"));

    // no actuals
    assert!(!text.contains("50,000"));
    assert!(!text.contains("Month totals"));
    assert!(!text.contains("Month-end plan"));
    assert!(!text.contains("Top 5"));
}

#[test]
fn test_current_month_pacing_figures() {
    let plan = PacingPlan::compute(sept(), date(2025, 9, 10), 100_000, 0, 15_000, MONTHLY_TARGET);

    assert_eq!(plan.remaining_sales, 300_000);
    assert_eq!(plan.remaining_days, 20);
    assert_eq!(plan.per_day_need, Some(15_000));
    assert_eq!(plan.plan_daily_rate, 15_000);
    assert_eq!(plan.days_needed_5h, 20);
    assert!(!plan.target_met);

    // seven days starting tomorrow, all pushes
    assert_eq!(plan.schedule.len(), 7);
    assert_eq!(plan.schedule[0].date, date(2025, 9, 11));
    assert!(plan.schedule.iter().all(|d| d.push));
}

#[test]
fn test_pacing_uses_5h_average_and_ceils() {
    let plan = PacingPlan::compute(sept(), date(2025, 9, 10), 100_000, 70_000, 15_000, MONTHLY_TARGET);

    assert_eq!(plan.plan_daily_rate, 70_000);
    // ceil(300000 / 70000)
    assert_eq!(plan.days_needed_5h, 5);
    let pushes: Vec<bool> = plan.schedule.iter().map(|d| d.push).collect();
    assert_eq!(pushes, vec![true, true, true, true, true, false, false]);
}

#[test]
fn test_pacing_last_day_and_target_met() {
    let last = PacingPlan::compute(sept(), date(2025, 9, 30), 100_000, 0, 15_000, MONTHLY_TARGET);
    assert_eq!(last.remaining_days, 0);
    assert_eq!(last.per_day_need, None);
    assert_eq!(last.days_needed_5h, 0);
    assert!(last.schedule.is_empty());

    let met = PacingPlan::compute(sept(), date(2025, 9, 10), 450_000, 0, 15_000, MONTHLY_TARGET);
    assert!(met.target_met);
    assert_eq!(met.remaining_sales, 0);
    assert_eq!(met.days_needed_5h, 0);
    assert!(met.schedule.iter().all(|d| !d.push));
}

#[test]
fn test_pacing_extreme_targets_do_not_overflow() {
    let huge = PacingPlan::compute(sept(), date(2025, 9, 10), -5, 0, 15_000, i64::MAX);
    assert_eq!(huge.remaining_sales, i64::MAX);
    assert_eq!(huge.per_day_need, Some(i64::MAX / 20 + 1));
    assert_eq!(huge.days_needed_5h, 20);

    let negative = PacingPlan::compute(sept(), date(2025, 9, 10), 100_000, 0, 15_000, i64::MIN);
    assert_eq!(negative.remaining_sales, 0);
    assert!(negative.target_met);
}

#[test]
fn test_month_stats_saturate_on_oversized_amounts() {
    let mut big = ClientRevenue::default();
    big.set(Client::U, i64::MAX);
    big.set(Client::R, 1);
    assert_eq!(big.total(), i64::MAX);

    let day = |d| {
        derive_record(
            date(2025, 9, d),
            &DayInput {
                total_hours: Some(5.0),
                clients: big,
                ..DayInput::default()
            },
        )
    };
    let stats = MonthStats::compute(&[day(1), day(2)], sept());
    assert_eq!(stats.overall.sales, i64::MAX);
    assert_eq!(stats.other.sales, i64::MAX);
}

#[test]
fn test_current_month_report_renders_plan() {
    let records = vec![
        record(date(2025, 9, 2), &[(Client::U, 60_000)], 6.0),
        record(date(2025, 9, 5), &[(Client::R, 40_000)], 4.0),
    ];

    let text = build_month_report(&records, sept(), &opts(date(2025, 9, 10)));

    assert!(text.contains("Monthly target 400,000: ❌ (100,000 / 300,000 to go)"));
    assert!(text.contains("Days left: 20 (from tomorrow) / needed per day: 15,000"));
    // 5h+ average is 60,000 → ceil(300000 / 60000) = 5
    assert!(text.contains("5h+ days needed: 5 (at avg daily 60,000)"));
    assert!(text.contains("[Month-end plan]"));
    assert!(text.contains("2025-09-11 (Thu) : push for 5h+ (target 60,000)"));
    assert!(text.contains("2025-09-16 (Tue) : light/rest"));
    assert!(!text.contains("2025-09-18"));
}

#[test]
fn test_past_month_has_no_plan() {
    let records = vec![record(date(2025, 9, 2), &[(Client::U, 60_000)], 6.0)];
    let report = MonthlyReport::compute(&records, sept(), &opts(date(2025, 11, 1))).unwrap();

    assert_eq!(report.mode, ReportMode::Past);
    assert!(report.pacing.is_none());

    let text = report.render();
    assert!(text.contains("[Month totals"));
    assert!(text.contains("[Top 5 hourly]"));
    assert!(!text.contains("Month-end plan"));
    assert!(!text.contains("Days left"));
}

#[test]
fn test_top_and_bottom_five() {
    // rates 1000, 2000, ..., 6000
    let mut records: Vec<DailyRecord> = (1..=6)
        .map(|i| record(date(2025, 9, i), &[(Client::U, i as i64 * 2000)], 2.0))
        .collect();
    // zero-hour day with revenue never ranks
    records.push(record(date(2025, 9, 7), &[(Client::W, 99_000)], 0.0));

    let ranking = Ranking::compute(&records);

    let top: Vec<i64> = ranking.top.iter().map(|d| d.hourly).collect();
    let bottom: Vec<i64> = ranking.bottom.iter().map(|d| d.hourly).collect();
    assert_eq!(top, vec![6000, 5000, 4000, 3000, 2000]);
    assert_eq!(bottom, vec![1000, 2000, 3000, 4000, 5000]);
    assert!(ranking.top.iter().all(|d| d.date != date(2025, 9, 7)));
    assert!(ranking.bottom.iter().all(|d| d.date != date(2025, 9, 7)));
}

#[test]
fn test_ranking_breakdown_nonzero_descending() {
    let records = vec![record(
        date(2025, 9, 8),
        &[(Client::U, 2000), (Client::R, 8000), (Client::De, 0)],
        2.0,
    )];

    let ranking = Ranking::compute(&records);
    assert_eq!(ranking.top[0].breakdown, vec![(Client::R, 8000), (Client::U, 2000)]);

    let text = build_month_report(&records, sept(), &opts(date(2025, 10, 1)));
    assert!(text.contains("2025/09/08: 5,000 (10,000 / 2h)"));
    assert!(text.contains("  breakdown: R 8,000 / U 2,000"));
}

#[test]
fn test_only_zero_hour_rows() {
    let records = vec![record(date(2025, 9, 9), &[(Client::U, 5000)], 0.0)];
    let text = build_month_report(&records, sept(), &opts(date(2025, 10, 1)));

    assert!(text.contains("No data (only zero-hour rows)"));
    assert!(text.contains("sales 5,000 / hours 0 h / hourly 0"));
}

#[test]
fn test_tier_boundaries_inclusive() {
    let summer = Season::Summer.targets().tiers;
    assert_eq!(summer.grade(1999), HourlyGrade::NotMet);
    assert_eq!(summer.grade(2000), HourlyGrade::Pass);
    assert_eq!(summer.grade(2500), HourlyGrade::Good);
    assert_eq!(summer.grade(3000), HourlyGrade::Excellent);

    let winter = Season::Winter.targets().tiers;
    assert_eq!(winter.grade(2999), HourlyGrade::NotMet);
    assert_eq!(winter.grade(3000), HourlyGrade::Pass);
    assert_eq!(winter.grade(3500), HourlyGrade::Good);
    assert_eq!(winter.grade(4000), HourlyGrade::Excellent);
}

#[test]
fn test_seasons() {
    for m in [12, 1, 2, 3] {
        assert_eq!(Season::of_month(m), Season::Winter);
    }
    for m in 4..=11 {
        assert_eq!(Season::of_month(m), Season::Summer);
    }
    assert_eq!(Season::Winter.targets().daily_target, 20_000);
    assert_eq!(Season::Summer.targets().daily_target, 15_000);
}

#[test]
fn test_fresh_caution_line() {
    let mut day = record(date(2025, 9, 3), &[(Client::Afresh, 4000)], 2.0);
    day.fresh_hours = 2.0;

    let text = build_month_report(&[day], sept(), &opts(date(2025, 10, 1)));
    assert!(text.contains("Fresh hourly rate is only indicative"));

    let plain = record(date(2025, 9, 3), &[(Client::U, 4000)], 2.0);
    let text = build_month_report(&[plain], sept(), &opts(date(2025, 10, 1)));
    assert!(!text.contains("only indicative"));
}

#[test]
fn test_configured_monthly_target() {
    let records = vec![record(date(2025, 9, 2), &[(Client::U, 60_000)], 6.0)];
    let text = build_month_report(
        &records,
        sept(),
        &ReportOptions {
            today: date(2025, 9, 10),
            monthly_target: 50_000,
        },
    );
    assert!(text.contains("Monthly target 50,000: ✅ (60,000 / 0 to go)"));
}

#[test]
fn test_season_footer() {
    let records = vec![
        record(date(2025, 9, 1), &[(Client::U, 10000)], 4.0),
        record(date(2025, 9, 2), &[(Client::U, 20000)], 6.0),
    ];
    let text = build_month_report(&records, sept(), &opts(date(2025, 10, 1)));

    assert!(text.contains("Season: summer"));
    assert!(text.contains("summer: avg daily 15,000 (5h+): ✅ (20,000 / 5h+ days 1)"));
    assert!(text.contains("excellent ✅ (3,000/h)"));
}
