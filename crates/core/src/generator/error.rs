use thiserror::Error;

/// Errors reported by an event generator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("No calendar available for {year} ({bundle})")]
    NotFound { year: i32, bundle: &'static str },
    #[error("Malformed calendar data: {0}")]
    Malformed(String),
    #[error("Generator unavailable: {0}")]
    Unavailable(String),
    #[error("Generator timed out after {0}ms")]
    Timeout(u64),
}

/// Result type for generator operations.
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = GeneratorError::NotFound {
            year: 2024,
            bundle: "Spain_Es",
        };
        assert_eq!(error.to_string(), "No calendar available for 2024 (Spain_Es)");
    }

    #[test]
    fn test_malformed_display() {
        let error = GeneratorError::Malformed("expected a map".to_string());
        assert_eq!(error.to_string(), "Malformed calendar data: expected a map");
    }

    #[test]
    fn test_timeout_display() {
        assert_eq!(
            GeneratorError::Timeout(10_000).to_string(),
            "Generator timed out after 10000ms"
        );
    }
}
