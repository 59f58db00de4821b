//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so the CLI can report
//! failures in one place.

use rusqlite::ErrorCode;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store
    // ---------------------------
    /// The backing store is unreachable, locked past the busy timeout or misconfigured.
    #[error("Store unreachable: {0}")]
    Connectivity(String),

    /// A write was malformed and was rejected before touching the table.
    #[error("Integrity error: {0}")]
    Integrity(String),

    #[error("Database error: {0}")]
    Db(rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month (expected YYYY-MM): {0}")]
    InvalidMonth(String),

    #[error("Invalid client: {0}")]
    InvalidClient(String),

    #[error("Amount out of range (max 1,000,000,000,000): {0}")]
    InvalidAmount(String),

    // ---------------------------
    // Config / access
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Access denied: {0}")]
    AuthFailed(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        match e.sqlite_error_code() {
            Some(
                ErrorCode::CannotOpen
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::NotADatabase
                | ErrorCode::SystemIoFailure
                | ErrorCode::PermissionDenied
                | ErrorCode::ReadOnly,
            ) => AppError::Connectivity(e.to_string()),
            Some(ErrorCode::ConstraintViolation) => AppError::Integrity(e.to_string()),
            _ => AppError::Db(e),
        }
    }
}

impl AppError {
    /// True for failures of the backing store itself (as opposed to bad input).
    pub fn is_connectivity(&self) -> bool {
        matches!(self, AppError::Connectivity(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
