//! Unified application error type.
//! All modules (core, shell, export, config) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

/// Constraint violations checked before an event is appended to a ledger.
/// Each variant names the specific constraint that failed, so the shell can
/// re-surface it to the operator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("vendor name must not be empty")]
    EmptyVendor,

    #[error("headcount must be at least 1")]
    ZeroCount,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid shift code: {0}")]
    InvalidShift(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Ledger errors
    // ---------------------------
    #[error("Unknown project id: {0}")]
    ProjectNotFound(String),

    #[error("Rejected event: {0}")]
    Validation(#[from] ValidationError),

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
}

pub type AppResult<T> = Result<T, AppError>;
