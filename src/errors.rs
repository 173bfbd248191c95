//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid day of month: {0}")]
    InvalidDay(String),

    #[error("Invalid month name: {0}")]
    InvalidMonth(String),

    // ---------------------------
    // Entry / wizard errors
    // ---------------------------
    #[error("End time must be after start time, considering the break time")]
    NonPositiveDuration,

    #[error("No entries found for {0}")]
    NoEntriesForMonth(String),

    #[error("Invalid entry index: {0}")]
    InvalidIndex(usize),

    // ---------------------------
    // Account / session errors
    // ---------------------------
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("An account already exists for {0}")]
    UserExists(String),

    #[error("Not logged in: run `wagelog login` first")]
    NotLoggedIn,

    // ---------------------------
    // Punch clock errors
    // ---------------------------
    #[error("Punch clock error: {0}")]
    Punch(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
