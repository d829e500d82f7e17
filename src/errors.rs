//! Unified application error type.
//! All modules (store, core, cli, audio, utils) return AppError to keep the
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
    // Log store
    // ---------------------------
    #[error("Could not create directory for log file: {path}: {source}")]
    DirectoryCreation { path: String, source: io::Error },

    #[error("Could not write to log file: {path}: {source}")]
    FileWrite { path: String, source: io::Error },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid duration format: {0}")]
    InvalidDuration(String),

    // ---------------------------
    // Audio
    // ---------------------------
    #[error("Could not initialize audio: {0}")]
    AudioInit(String),

    #[error("Could not load music track: {0}")]
    AudioLoad(String),

    #[error("Could not play music: {0}")]
    AudioPlayback(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
