//! Unified application error type.
//! Engine, ingestion, resolver, store and CLI all return AppError so that a
//! failure can be reported (or skipped) at the call site in one way.

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
    // Parsing errors (record excluded, batch continues)
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Validation errors (rejected at ingestion)
    // ---------------------------
    #[error("Coordinate out of range: lat={lat}, lon={lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("Invalid radius: {0} (expected a finite, non-negative number of miles)")]
    InvalidRadius(f64),

    #[error("Invalid location query: {0}")]
    InvalidQuery(String),

    // ---------------------------
    // Location resolver
    // ---------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Location not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Event store
    // ---------------------------
    #[error("Event #{0} not found")]
    EventNotFound(i64),

    #[error("A location search is already in progress (request #{0})")]
    SearchInProgress(u64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors that reject a single record at ingestion time.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidNumber(_)
                | AppError::InvalidCoordinate { .. }
        )
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
