use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ReportOptions, build_month_report};
use crate::db::pool::DbPool;
use crate::db::queries::load_all_records;
use crate::errors::AppResult;
use crate::models::YearMonth;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { month } = cmd {
        let today = date::today();
        let month = match month {
            Some(m) => YearMonth::parse(m)?,
            None => YearMonth::of(today),
        };

        let pool = DbPool::new(&cfg.database)?;
        let records = load_all_records(&pool.conn)?;

        let opts = ReportOptions {
            today,
            monthly_target: cfg.monthly_target,
        };

        println!("{}", build_month_report(&records, month, &opts));
    }
    Ok(())
}
