//! JSON output formatting.

use crate::error::Result;

/// Format a value as compact JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordo_core::liturgy::{cycle_for, SeasonKey};

    #[test]
    fn test_cycle_json() {
        let json = format_json(&cycle_for(2022).unwrap()).unwrap();
        assert_eq!(json, r#"{"end_year":2022,"sunday":"C","weekday":"II"}"#);
    }

    #[test]
    fn test_season_key_json() {
        assert_eq!(format_json(&SeasonKey::OrdinaryTime2).unwrap(), "\"ORDINARY_TIME_2\"");
    }
}
