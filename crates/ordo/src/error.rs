//! Shell error types.

use chrono::NaiveDate;
use ordo_core::liturgy::LiturgyError;
use thiserror::Error;

/// Result type alias for shell operations.
pub type Result<T> = std::result::Result<T, OrdoError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum OrdoError {
    #[error(transparent)]
    Liturgy(#[from] LiturgyError),

    #[error("Date {0} is not part of the resolved year")]
    DayNotResolved(NaiveDate),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
