use crate::cli::commands::show::print_record;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, DayEdits, SaveOutcome};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Client;
use crate::ui::messages::{info, success};
use crate::utils::date::parse_date_arg;

/// Parse one `--client KEY=AMOUNT` argument. The amount is kept as typed.
pub fn parse_client_arg(arg: &str) -> AppResult<(Client, String)> {
    let (key, amount) = arg
        .split_once('=')
        .ok_or_else(|| AppError::InvalidClient(format!("{arg} (expected KEY=AMOUNT)")))?;

    let client = Client::from_code(key).ok_or_else(|| {
        let known: Vec<&str> = Client::ALL.iter().map(|c| c.column()).collect();
        AppError::InvalidClient(format!("{} (known: {})", key.trim(), known.join(", ")))
    })?;

    Ok((client, amount.to_string()))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        hours,
        flex,
        fresh,
        clients,
        memo,
        reset,
    } = cmd
    {
        let d = parse_date_arg(date)?;

        let clients = clients
            .iter()
            .map(|c| parse_client_arg(c))
            .collect::<AppResult<Vec<_>>>()?;

        let edits = DayEdits {
            total_hours: hours.clone(),
            flex_hours: flex.clone(),
            fresh_hours: fresh.clone(),
            memo: memo.clone(),
            clients,
            reset: *reset,
        };

        let mut pool = DbPool::new(&cfg.database)?;

        match AddLogic::apply(&mut pool, d, &edits)? {
            SaveOutcome::Saved(rec) => {
                success(format!("Saved {}.", rec.date_key()));
                print_record(&rec);
            }
            SaveOutcome::Unchanged(rec) => {
                info(format!("No changes for {}; nothing saved.", rec.date_key()));
            }
        }
    }

    Ok(())
}
