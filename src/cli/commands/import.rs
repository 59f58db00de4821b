use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ImportLogic;
use crate::models::YearMonth;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, month } = cmd {
        let month = month.as_deref().map(YearMonth::parse).transpose()?;

        let mut pool = DbPool::new(&cfg.database)?;
        let summary = ImportLogic::import(&mut pool, file, month)?;

        match month {
            Some(m) => success(format!(
                "Replaced {} with {} row(s) ({} previous row(s) removed).",
                m, summary.imported, summary.replaced
            )),
            None => success(format!("Imported {} row(s).", summary.imported)),
        }
    }
    Ok(())
}
