use crate::db::queries::{count_records, load_all_records, load_months};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::fmt_money;
use rusqlite::Connection;
use std::fs;

pub fn print_db_info(conn: &Connection, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let count = count_records(conn)?;
    let records = load_all_records(conn)?;
    let corrupt = count - records.len() as i64;

    println!("{}• Total rows:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);
    if corrupt > 0 {
        println!(
            "{}• Rows with unreadable date:{} {}{}{}",
            CYAN, RESET, YELLOW, corrupt, RESET
        );
    }

    //
    // 3) DATE RANGE
    //
    let fmt_first = records
        .first()
        .map(|r| r.date_key())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = records
        .last()
        .map(|r| r.date_key())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) MONTHS + LIFETIME SALES
    //
    let months = load_months(conn)?;
    let lifetime = records
        .iter()
        .fold(0_i64, |acc, r| acc.saturating_add(r.total_sales));
    println!("{}• Months with data:{} {}", CYAN, RESET, months.len());
    println!("{}• Lifetime sales:{} {}", CYAN, RESET, fmt_money(lifetime));

    println!();
    Ok(())
}
