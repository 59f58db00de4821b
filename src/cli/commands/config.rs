use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{migrate_config, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

/// `$EDITOR`, then `$VISUAL`, then the platform default.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn open_in(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Try the requested editor first; fall back to the default one once.
fn edit_config_file(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let fallback = default_editor();
    let first = requested.unwrap_or(&fallback);

    if open_in(first, path) {
        success(format!("Configuration edited with '{first}'."));
        return Ok(());
    }

    warning(format!("Editor '{first}' failed, trying '{fallback}'."));
    if open_in(&fallback, path) {
        success(format!("Configuration edited with '{fallback}'."));
        Ok(())
    } else {
        Err(AppError::Config(format!(
            "could not open {} with '{fallback}'",
            path.display()
        )))
    }
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        println!("📄 {}\n", path.display());
        println!("{}", cfg.to_yaml()?);
    }

    if (*check || *migrate || *edit_config) && !path.exists() {
        return Err(AppError::Config(format!(
            "no configuration file at {} (run `rdaybook init` first)",
            path.display()
        )));
    }

    if *check {
        let missing = missing_keys(&path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("Missing keys: {}", missing.join(", ")));
            info("`rdaybook config --migrate` adds them with their defaults.");
        }
    }

    if *migrate {
        let added = migrate_config(&path)?;
        if added.is_empty() {
            info("Nothing to migrate.");
        } else {
            success(format!("Added keys: {}", added.join(", ")));
        }
    }

    if *edit_config {
        edit_config_file(&path, editor.as_deref())?;
    }

    Ok(())
}
