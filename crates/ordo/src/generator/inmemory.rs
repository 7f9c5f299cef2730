//! In-memory generator for tests and embedding.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ordo_core::generator::{CivilYearEvents, EventGenerator, GeneratorError, GeneratorResult};
use ordo_core::liturgy::Language;

/// Serves preloaded civil years.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGenerator {
    years: Arc<RwLock<HashMap<(i32, Language), CivilYearEvents>>>,
}

impl InMemoryGenerator {
    /// Creates an empty generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the events of a civil year, replacing any previous ones.
    pub async fn insert(&self, civil_year: i32, language: Language, events: CivilYearEvents) {
        let mut years = self.years.write().await;
        years.insert((civil_year, language), events);
    }

    /// Returns the number of stored years.
    pub async fn len(&self) -> usize {
        self.years.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.years.read().await.is_empty()
    }
}

#[async_trait]
impl EventGenerator for InMemoryGenerator {
    async fn generate(
        &self,
        civil_year: i32,
        language: Language,
    ) -> GeneratorResult<CivilYearEvents> {
        let years = self.years.read().await;
        years
            .get(&(civil_year, language))
            .cloned()
            .ok_or(GeneratorError::NotFound {
                year: civil_year,
                bundle: language.bundle_name(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ordo_core::liturgy::{resolve_liturgical_year, LiturgyError, RawEvent, Rank};

    fn single_day(year: i32) -> CivilYearEvents {
        let date = NaiveDate::from_ymd_opt(year, 6, 1).unwrap();
        let mut events = CivilYearEvents::new();
        events.insert(date, vec![RawEvent::new(date, "weekday", "Feria", Rank::Feria)]);
        events
    }

    #[tokio::test]
    async fn test_insert_and_generate() {
        let generator = InMemoryGenerator::new();
        assert!(generator.is_empty().await);

        generator.insert(2025, Language::Spanish, single_day(2025)).await;

        assert_eq!(generator.len().await, 1);
        let events = generator.generate(2025, Language::Spanish).await.unwrap();
        assert_eq!(events.len(), 1);
    }

    #[tokio::test]
    async fn test_years_are_keyed_by_language() {
        let generator = InMemoryGenerator::new();
        generator.insert(2025, Language::Spanish, single_day(2025)).await;

        let result = generator.generate(2025, Language::Latin).await;
        assert_eq!(
            result,
            Err(GeneratorError::NotFound {
                year: 2025,
                bundle: "Spain_La",
            })
        );
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let generator = InMemoryGenerator::new();
        let clone = generator.clone();
        clone.insert(2024, Language::Latin, single_day(2024)).await;

        assert!(generator.generate(2024, Language::Latin).await.is_ok());
    }

    #[tokio::test]
    async fn test_sparse_years_fail_resolution() {
        let generator = InMemoryGenerator::new();
        generator.insert(2024, Language::Spanish, single_day(2024)).await;
        generator.insert(2025, Language::Spanish, single_day(2025)).await;

        let result = resolve_liturgical_year(&generator, 2025, Language::Spanish).await;
        assert_eq!(
            result.unwrap_err(),
            LiturgyError::MissingDay(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap())
        );
    }
}
