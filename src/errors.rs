//! Unified application error type.
//! All modules (store, db, cli, export, utils) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Storage-related
    // ---------------------------
    #[error("Storage error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Stored data is corrupted: {0}")]
    CorruptData(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid hourly rate: {0}")]
    InvalidRate(String),

    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Id prefix '{0}' matches more than one entry")]
    AmbiguousId(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Interchange errors
    // ---------------------------
    #[error("Backup import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
