use std::{env, path::PathBuf, time::Duration};

use ordo_core::liturgy::Language;

/// Shell configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory of generator exports (default: "data")
    pub data_dir: PathBuf,
    /// Upper bound for one generator call in milliseconds (default: 10,000)
    pub generator_timeout_ms: u64,
    /// Language code (default: "es")
    pub language: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ORDO_DATA_DIR` - Root of the `<bundle>/<year>.json` exports (default: "data")
    /// - `ORDO_GENERATOR_TIMEOUT_MS` - Generator call timeout (default: 10,000)
    /// - `ORDO_LANG` - Language code, `es` or `la` (default: "es")
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("ORDO_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            generator_timeout_ms: env::var("ORDO_GENERATOR_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            language: env::var("ORDO_LANG").unwrap_or_else(|_| "es".to_string()),
        }
    }

    /// Applies command line overrides on top of the environment.
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, language: Option<String>) -> Self {
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        if let Some(language) = language {
            self.language = language;
        }
        self
    }

    /// Get the generator timeout as a Duration.
    pub fn generator_timeout(&self) -> Duration {
        Duration::from_millis(self.generator_timeout_ms)
    }

    /// Get the configured language. Unknown codes resolve to Spanish.
    pub fn language(&self) -> Language {
        Language::from_code(&self.language)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config() -> Config {
        Config {
            data_dir: PathBuf::from("exports"),
            generator_timeout_ms: 2_500,
            language: "la".to_string(),
        }
    }

    #[test]
    fn test_generator_timeout_conversion() {
        assert_eq!(make_config().generator_timeout(), Duration::from_millis(2_500));
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!(make_config().language(), Language::Latin);

        let config = Config {
            language: "en".to_string(),
            ..make_config()
        };
        assert_eq!(config.language(), Language::Spanish);
    }

    #[test]
    fn test_overrides() {
        let config = make_config().with_overrides(Some(PathBuf::from("/srv/ordo")), None);
        assert_eq!(config.data_dir, PathBuf::from("/srv/ordo"));
        assert_eq!(config.language, "la");

        let config = make_config().with_overrides(None, Some("es".to_string()));
        assert_eq!(config.data_dir, PathBuf::from("exports"));
        assert_eq!(config.language(), Language::Spanish);
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("ORDO_DATA_DIR");
        env::remove_var("ORDO_GENERATOR_TIMEOUT_MS");
        env::remove_var("ORDO_LANG");

        let config = Config::from_env();

        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.generator_timeout_ms, 10_000);
        assert_eq!(config.language(), Language::Spanish);
    }
}
