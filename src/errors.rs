//! Unified application error type.
//! Every stage of the report pipeline (api, core, export, cli) returns
//! AppError so callers can surface a single message to the user.

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
    // Remote service
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Request preconditions
    // ---------------------------
    #[error("Invalid Employee ID. Please check and try again.")]
    UnknownEmployee(String),

    #[error(
        "There are no entries in this Date Range. Please change Date Range or update entries in ClickUp."
    )]
    NoEntries,

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: end date {end} is before start date {start}")]
    InvalidRange { start: String, end: String },

    // ---------------------------
    // Entry data
    // ---------------------------
    #[error("Invalid duration in time entry #{position}: '{value}' is not an integer")]
    DataFormat { position: usize, value: String },

    #[error("Invalid start timestamp in time entry #{position}: '{value}'")]
    InvalidTimestamp { position: usize, value: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
