//! Unified application error type.
//! Every layer (api, store, core, cli) returns AppError so failures are
//! handled once, at the command boundary.

use std::fmt;
use std::io;
use thiserror::Error;

/// A normal, user-facing refusal to punch. Not a crash path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    CannotCheckIn,
    CannotCheckOut,
    TimesheetFull,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Rejection::CannotCheckIn => "you can't check in (already checked in)",
            Rejection::CannotCheckOut => "you can't check out (not checked in)",
            Rejection::TimesheetFull => "timesheet is full",
        };
        f.write_str(msg)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / encoding
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Remote service
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Remote service error: {0}")]
    Remote(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM, 24-hour)")]
    InvalidTime(String),

    #[error("Malformed record: {0}")]
    Parse(String),

    // ---------------------------
    // Credentials / config
    // ---------------------------
    #[error("Credential error: {0}")]
    Credentials(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    // ---------------------------
    // Logic
    // ---------------------------
    #[error("{0}")]
    Rejected(Rejection),
}

impl From<ureq::Error> for AppError {
    fn from(err: ureq::Error) -> Self {
        AppError::Http(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
