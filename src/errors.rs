//! Unified application error type.
//! All modules (schedule, config, cli, ui) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Schedule source
    // ---------------------------
    #[error("Schedule source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Schedule source incomplete: missing sheet '{0}'")]
    ScheduleIncomplete(String),

    // ---------------------------
    // Cache
    // ---------------------------
    #[error("Cache file corrupt: {0}")]
    CacheCorrupt(String),

    // ---------------------------
    // Time / parsing errors
    // ---------------------------
    #[error("Current time {0} is before opening hours")]
    BeforeOpening(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Unknown role code: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
