use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::YearMonth;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Yes/no confirmation on stdin; `--yes` answers for the user.
fn confirmed(prompt: &str, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }

    warning(format!("{prompt} This cannot be undone."));
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).is_ok()
        && matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { dates, month, yes } = cmd {
        if let Some(m) = month {
            let m = YearMonth::parse(m)?;

            if !confirmed(&format!("Delete ALL records of {m}?"), *yes) {
                info("Operation cancelled.");
                return Ok(());
            }

            let mut pool = DbPool::new(&cfg.database)?;
            let deleted = DeleteLogic::delete_month(&mut pool, m)?;
            success(format!("Deleted {} record(s) of {}.", deleted, m));
            return Ok(());
        }

        if dates.is_empty() {
            info("No dates selected; nothing deleted.");
            return Ok(());
        }

        let days = dates
            .iter()
            .map(|s| date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())))
            .collect::<AppResult<Vec<_>>>()?;

        if !confirmed(&format!("Delete {} selected day(s)?", days.len()), *yes) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let deleted = DeleteLogic::delete_days(&mut pool, &days)?;

        if deleted == 0 {
            info("No matching records; nothing deleted.");
        } else {
            success(format!("Deleted {} record(s).", deleted));
        }
    }

    Ok(())
}
