//! Unified application error type.
//! Loader, reporters, prompts and commands all return AppError so that
//! `main` has a single place where fatal conditions are reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed while waiting for an answer")]
    InputClosed,

    // ---------------------------
    // Dataset-related
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("Dataset {path}: {reason}")]
    Dataset { path: String, reason: String },

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Invalid start time on data row {row}: '{value}'")]
    InvalidStartTime { row: usize, value: String },

    // ---------------------------
    // Selection parsing
    // ---------------------------
    #[error("Unknown city: {0}")]
    InvalidCity(String),

    #[error("Unknown month: {0}")]
    InvalidMonth(String),

    #[error("Unknown day: {0}")]
    InvalidDay(String),

    // ---------------------------
    // Statistics
    // ---------------------------
    #[error("Cannot compute {0}: no trips match the selected filters")]
    EmptyTable(&'static str),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
