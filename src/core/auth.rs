//! Access gate for data commands.
//!
//! Credentials come from `APP_USERNAME` / `APP_PASSWORD`, falling back to the
//! `auth` section of the config file. Skipping the gate (`DEV_NO_AUTH=1`) is never
//! honoured in a recognised production environment.

use crate::config::AuthConfig;
use crate::errors::{AppError, AppResult};
use std::collections::HashMap;

/// Variables whose presence marks a production deployment.
pub const PRODUCTION_MARKERS: [&str; 3] = [
    "RAILWAY_ENVIRONMENT",
    "RAILWAY_PROJECT_ID",
    "RAILWAY_SERVICE_ID",
];

pub type Env = HashMap<String, String>;

pub fn process_env() -> Env {
    std::env::vars().collect()
}

fn non_empty<'a>(env: &'a Env, key: &str) -> Option<&'a str> {
    env.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

pub fn is_production_env(env: &Env) -> bool {
    PRODUCTION_MARKERS.iter().any(|k| non_empty(env, k).is_some())
}

pub fn should_skip_auth(env: &Env) -> bool {
    if is_production_env(env) {
        return false;
    }
    env.get("DEV_NO_AUTH").map(String::as_str) == Some("1")
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Environment first, config second, field by field.
pub fn load_credentials(env: &Env, cfg: Option<&AuthConfig>) -> Credentials {
    let username = non_empty(env, "APP_USERNAME")
        .map(str::to_string)
        .or_else(|| cfg.map(|c| c.username.clone()))
        .unwrap_or_default();
    let password = non_empty(env, "APP_PASSWORD")
        .map(str::to_string)
        .or_else(|| cfg.map(|c| c.password.clone()))
        .unwrap_or_default();

    Credentials { username, password }
}

pub fn validate(username: &str, password: &str, expected: &Credentials) -> bool {
    !expected.username.is_empty()
        && !expected.password.is_empty()
        && username == expected.username
        && password == expected.password
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// `DEV_NO_AUTH=1` outside production
    Skipped,
    /// No credentials configured on a local machine
    Open,
    Granted,
}

pub fn check_access(
    env: &Env,
    cfg: Option<&AuthConfig>,
    user: Option<&str>,
    password: Option<&str>,
) -> AppResult<Access> {
    if should_skip_auth(env) {
        return Ok(Access::Skipped);
    }

    let expected = load_credentials(env, cfg);

    match (expected.username.is_empty(), expected.password.is_empty()) {
        (true, true) if is_production_env(env) => Err(AppError::Config(
            "credentials are not configured (APP_USERNAME/APP_PASSWORD or config auth)".into(),
        )),
        (true, true) => Ok(Access::Open),
        (false, false) => {
            if validate(user.unwrap_or(""), password.unwrap_or(""), &expected) {
                Ok(Access::Granted)
            } else {
                Err(AppError::AuthFailed("wrong username or password".into()))
            }
        }
        _ => Err(AppError::Config(
            "incomplete credentials: both username and password must be set".into(),
        )),
    }
}
