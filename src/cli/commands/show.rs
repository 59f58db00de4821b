use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_row;
use crate::errors::AppResult;
use crate::models::DailyRecord;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{GREY, RED, RESET, YELLOW};
use crate::utils::date::{parse_date_arg, weekday_name};
use crate::utils::formatting::bold;
use crate::utils::{fmt_hours, fmt_money};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date } = cmd {
        let d = parse_date_arg(date)?;
        let pool = DbPool::new(&cfg.database)?;

        let row = load_row(&pool.conn, &d.format("%Y-%m-%d").to_string())?;

        match row.as_ref().and_then(|r| r.to_record()) {
            Some(rec) => print_record(&rec),
            None if row.is_some() => {
                warning(format!("The record for {} cannot be read.", d));
            }
            None => info(format!("No record for {} ({}).", d, weekday_name(d))),
        }
    }
    Ok(())
}

/// Detail view of one saved day.
pub fn print_record(rec: &DailyRecord) {
    header(format!("{} ({})", rec.date_key(), weekday_name(rec.date)));

    println!("{:<14} {}", "Sales:", bold(&fmt_money(rec.total_sales)));
    println!("{:<14} {}", "Hours:", fmt_hours(rec.total_hours));
    println!(
        "{:<14} flex {} / fresh {} / other {}",
        "",
        fmt_hours(rec.flex_hours),
        fmt_hours(rec.fresh_hours),
        fmt_hours(rec.other_hours)
    );
    match rec.hourly_rate {
        Some(rate) => println!("{:<14} {}", "Hourly:", fmt_money(rate)),
        None => println!("{:<14} {GREY}-{RESET}", "Hourly:"),
    }

    if rec.over_threshold {
        println!("{:<14} {YELLOW}5h+{RESET}", "");
    }
    if rec.sales_without_hours {
        println!("{RED}⚠ sales without hours{RESET}");
    }

    let breakdown = rec.clients.nonzero_desc();
    if !breakdown.is_empty() {
        println!("Clients:");
        for (client, amount) in breakdown {
            println!("  {:<10} {:>10}", client.label(), fmt_money(amount));
        }
    }

    if !rec.memo.is_empty() {
        println!("Memo: {}", rec.memo);
    }
}
