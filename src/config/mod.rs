use crate::core::calculator::normalize::MAX_AMOUNT;
use crate::core::report::targets::MONTHLY_TARGET;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

/// Fallback credentials for the access gate (environment variables win).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_monthly_target")]
    pub monthly_target: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_monthly_target() -> i64 {
    MONTHLY_TARGET
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            monthly_target: default_monthly_target(),
            auth: None,
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.rdaybook`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rdaybook")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdaybook.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rdaybook.sqlite")
    }

    /// Load configuration from the default file, or defaults if it does not exist
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the report cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=MAX_AMOUNT).contains(&self.monthly_target) {
            return Err(AppError::Config(format!(
                "monthly_target must be between 1 and {MAX_AMOUNT}, got {}",
                self.monthly_target
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Initialize the configuration file and the database location.
    ///
    /// `custom_db` may be absolute or relative to the config directory.
    /// With `is_test` the config file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut cfg = if is_test {
            Self::default()
        } else {
            Self::load()?
        };
        cfg.database = db_path.to_string_lossy().to_string();

        if !is_test {
            cfg.save_to(&Self::config_file())?;
        }

        Ok(cfg)
    }
}
