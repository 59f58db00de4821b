use crate::core::report::MonthlyReport;
use crate::core::report::pacing::PacingPlan;
use crate::core::report::ranking::RankedDay;
use crate::core::report::stats::{CategoryTotals, MonthStats};
use crate::core::report::targets::Season;
use crate::utils::date::weekday_name;
use crate::utils::formatting::{fmt_hours, fmt_money};

/// Fresh hours below this make the Fresh hourly rate only indicative.
const FRESH_CAUTION_HOURS: f64 = 5.0;

fn header(r: &MonthlyReport) -> String {
    format!("[{} monthly report]", r.stats.month)
}

fn category_line(label: &str, c: &CategoryTotals) -> String {
    format!(
        "{label:<6}: sales {} / hours {} h / hourly {}",
        fmt_money(c.sales),
        fmt_hours(c.hours),
        fmt_money(c.hourly)
    )
}

fn targets_block(lines: &mut Vec<String>, season: Season, monthly_target: i64) {
    let t = season.targets();
    lines.push("[Targets]".into());
    lines.push(format!("Monthly target: {}", fmt_money(monthly_target)));
    lines.push(format!("Season: {} ({})", season.label(), season.months_label()));
    lines.push(format!(
        "- avg daily (5h+) target: {}",
        fmt_money(t.daily_target)
    ));
    lines.push(format!(
        "- hourly target: pass {} / good {} / excellent {}",
        fmt_money(t.tiers.pass),
        fmt_money(t.tiers.good),
        fmt_money(t.tiers.excellent)
    ));
}

/// Header and seasonal targets, no actuals.
pub(super) fn future(r: &MonthlyReport) -> String {
    let mut lines = vec![header(r)];
    lines.push(String::new());
    lines.push("(future month: actuals appear once the month starts)".into());
    lines.push(String::new());
    targets_block(&mut lines, r.stats.season, r.monthly_target);
    lines.join("\n")
}

fn totals_block(lines: &mut Vec<String>, s: &MonthStats) {
    lines.push("[Month totals (sales / hours / hourly)]".into());
    lines.push(category_line("All", &s.overall));
    lines.push(category_line("Flex", &s.flex));
    lines.push(category_line("Fresh", &s.fresh));
    lines.push(category_line("Other", &s.other));
    lines.push(format!(
        "Working days: {} / avg {} h per working day / avg {} h per calendar day",
        s.work_days,
        fmt_hours(s.avg_workday_hours),
        fmt_hours(s.avg_calendar_hours)
    ));

    if s.fresh.hours > 0.0 && s.fresh.hours < FRESH_CAUTION_HOURS {
        lines.push(String::new());
        lines.push(
            "Note: Fresh hours are still low, so the Fresh hourly rate is only indicative.".into(),
        );
    }
}

fn pacing_block(lines: &mut Vec<String>, p: &PacingPlan) {
    lines.push(String::new());
    lines.push(format!(
        "Monthly target {}: {} ({} / {} to go)",
        fmt_money(p.monthly_target),
        if p.target_met { "✅" } else { "❌" },
        fmt_money(p.sum_sales),
        fmt_money(p.remaining_sales)
    ));

    match p.per_day_need {
        Some(need) => lines.push(format!(
            "Days left: {} (from tomorrow) / needed per day: {}",
            p.remaining_days,
            fmt_money(need)
        )),
        None => lines.push("Days left: 0 (from tomorrow) / needed per day: -".into()),
    }

    lines.push(format!(
        "5h+ days needed: {} (at avg daily {})",
        p.days_needed_5h,
        fmt_money(p.plan_daily_rate)
    ));

    if p.schedule.is_empty() {
        return;
    }

    lines.push(String::new());
    lines.push("[Month-end plan]".into());
    lines.push(format!(
        "Policy: of the {} days left, front-load {} as 5h+ days",
        p.remaining_days, p.days_needed_5h
    ));

    for day in &p.schedule {
        let mark = if day.push {
            format!("push for 5h+ (target {})", fmt_money(p.plan_daily_rate))
        } else {
            "light/rest".to_string()
        };
        lines.push(format!(
            "{} ({}) : {}",
            day.date.format("%Y-%m-%d"),
            weekday_name(day.date),
            mark
        ));
    }
}

fn day_line(d: &RankedDay) -> String {
    format!(
        "{}: {} ({} / {}h)",
        d.date.format("%Y/%m/%d"),
        fmt_money(d.hourly),
        fmt_money(d.sales),
        fmt_hours(d.hours)
    )
}

fn breakdown_lines(d: &RankedDay) -> [String; 2] {
    let inner = if d.breakdown.is_empty() {
        "(no breakdown)".to_string()
    } else {
        d.breakdown
            .iter()
            .map(|(c, v)| format!("{} {}", c.label(), fmt_money(*v)))
            .collect::<Vec<_>>()
            .join(" / ")
    };

    [
        format!(
            "{}  sales: {}  hours: {}h  hourly: {}",
            d.date.format("%Y/%m/%d"),
            fmt_money(d.sales),
            fmt_hours(d.hours),
            fmt_money(d.hourly)
        ),
        format!("  breakdown: {inner}"),
    ]
}

fn rank_block(lines: &mut Vec<String>, title: &str, days: &[RankedDay]) {
    lines.push(String::new());
    lines.push(format!("[{title}]"));
    if days.is_empty() {
        lines.push("No data (only zero-hour rows)".into());
    }
    lines.extend(days.iter().map(day_line));
}

fn breakdown_block(lines: &mut Vec<String>, title: &str, days: &[RankedDay]) {
    lines.push(String::new());
    lines.push(format!("[{title}]"));
    if days.is_empty() {
        lines.push(super::NO_DATA.into());
    }
    for d in days {
        lines.extend(breakdown_lines(d));
    }
}

fn season_footer(lines: &mut Vec<String>, s: &MonthStats) {
    let label = s.season.label();
    let tiers = s.targets.tiers;

    lines.push(String::new());
    lines.push(format!("Season: {label}"));
    lines.push(format!(
        "{label}: avg daily {} (5h+): {} ({} / 5h+ days {})",
        fmt_money(s.targets.daily_target),
        if s.daily_target_met { "✅" } else { "❌" },
        fmt_money(s.avg_5h_sales),
        s.days_5h
    ));
    lines.push(format!(
        "{label}: hourly (pass {} / good {} / excellent {}): {} ({}/h)",
        fmt_money(tiers.pass),
        fmt_money(tiers.good),
        fmt_money(tiers.excellent),
        s.hourly_grade.label(),
        fmt_money(s.overall.hourly)
    ));
}

/// Current and past months.
pub(super) fn full(r: &MonthlyReport) -> String {
    let mut lines = vec![header(r), String::new()];

    totals_block(&mut lines, &r.stats);

    if let Some(p) = &r.pacing {
        pacing_block(&mut lines, p);
    }

    rank_block(&mut lines, "Top 5 hourly", &r.ranking.top);
    rank_block(&mut lines, "Bottom 5 hourly", &r.ranking.bottom);
    breakdown_block(&mut lines, "Top 5 breakdown", &r.ranking.top);
    breakdown_block(&mut lines, "Bottom 5 breakdown", &r.ranking.bottom);

    season_footer(&mut lines, &r.stats);

    lines.join("\n")
}
