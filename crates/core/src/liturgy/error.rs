use chrono::NaiveDate;
use thiserror::Error;

use crate::generator::GeneratorError;

/// Errors that abort the resolution of a liturgical year.
///
/// Lookup misses (unknown color, season without a banner, unknown language)
/// are not errors; they fall back to documented defaults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LiturgyError {
    #[error("Invalid liturgical year {year} (must be between {min} and {max})")]
    InvalidYear { year: i32, min: i32, max: i32 },
    #[error("Cannot choose a principal event for a day without events")]
    EmptyDay,
    #[error("Event generation failed for civil year {year}: {source}")]
    Upstream {
        year: i32,
        #[source]
        source: GeneratorError,
    },
    #[error("Generator produced no events for {0}")]
    MissingDay(NaiveDate),
}

/// Result type for liturgy operations.
pub type LiturgyResult<T> = std::result::Result<T, LiturgyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_year_display() {
        let error = LiturgyError::InvalidYear {
            year: 12,
            min: 1584,
            max: 9999,
        };
        assert_eq!(
            error.to_string(),
            "Invalid liturgical year 12 (must be between 1584 and 9999)"
        );
    }

    #[test]
    fn test_upstream_display_includes_source() {
        let error = LiturgyError::Upstream {
            year: 2024,
            source: GeneratorError::Timeout(500),
        };
        assert_eq!(
            error.to_string(),
            "Event generation failed for civil year 2024: Generator timed out after 500ms"
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_missing_day_display() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        assert_eq!(
            LiturgyError::MissingDay(date).to_string(),
            "Generator produced no events for 2025-02-28"
        );
    }
}
