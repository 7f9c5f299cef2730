//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Format a value for output.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => Ok(serde_json::to_string_pretty(value)?),
    }
}
