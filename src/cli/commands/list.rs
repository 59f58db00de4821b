use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::targets::Season;
use crate::db::pool::DbPool;
use crate::db::queries::{load_month_records, load_months};
use crate::errors::AppResult;
use crate::models::{DailyRecord, YearMonth};
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_rate, colorize_optional};
use crate::utils::date::weekday_name;
use crate::utils::table::{Column, Table};
use crate::utils::{fmt_hours, fmt_money};
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let month = match month {
            Some(m) => YearMonth::parse(m)?,
            None => match load_months(&pool.conn)?.last() {
                Some(m) => *m,
                None => {
                    info("No records yet.");
                    return Ok(());
                }
            },
        };

        let records = load_month_records(&pool.conn, month)?;
        if records.is_empty() {
            info(format!("No records for {}.", month));
            return Ok(());
        }

        header(format!("Records {}", month));
        println!("{}", month_table(&records).render());

        let sales = records
            .iter()
            .fold(0_i64, |acc, r| acc.saturating_add(r.total_sales));
        let hours: f64 = records.iter().map(|r| r.total_hours).sum();
        println!(
            "\n{} day(s) · sales {} · hours {}",
            records.len(),
            fmt_money(sales),
            fmt_hours(hours)
        );
    }
    Ok(())
}

fn opt_text(s: String) -> String {
    if s == "0" { String::new() } else { s }
}

/// Hourly rate coloured against the pass tier of the record's season, grey dash when unset.
fn hourly_cell(r: &DailyRecord) -> String {
    match r.hourly_rate {
        Some(rate) => {
            let pass = Season::of_month(r.date.month()).targets().tiers.pass;
            format!("{}{}{}", color_for_rate(rate, pass), fmt_money(rate), RESET)
        }
        None => colorize_optional("-"),
    }
}

pub fn month_table(records: &[DailyRecord]) -> Table {
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::right("Sales"),
        Column::right("Hours"),
        Column::right("Flex"),
        Column::right("Fresh"),
        Column::right("Other"),
        Column::right("Hourly"),
        Column::left("Flags"),
        Column::left("Memo"),
    ]);

    for r in records {
        let mut flags = Vec::new();
        if r.over_threshold {
            flags.push("5h+");
        }
        if r.sales_without_hours {
            flags.push("⚠ no hours");
        }

        table.add_row(vec![
            format!("{} {}", r.date_key(), weekday_name(r.date)),
            fmt_money(r.total_sales),
            fmt_hours(r.total_hours),
            opt_text(fmt_hours(r.flex_hours)),
            opt_text(fmt_hours(r.fresh_hours)),
            opt_text(fmt_hours(r.other_hours)),
            hourly_cell(r),
            flags.join(" "),
            r.memo.clone(),
        ]);
    }

    table
}
