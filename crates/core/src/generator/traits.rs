use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::liturgy::{Language, RawEvent};

use super::GeneratorResult;

/// Events of one civil year, keyed by date in generator order.
pub type CivilYearEvents = BTreeMap<NaiveDate, Vec<RawEvent>>;

/// Source of raw liturgical events for a civil year.
///
/// Implementations may be slow (they wrap an external computation), so the
/// call is async. Two calls for different years must be independent.
#[async_trait]
pub trait EventGenerator: Send + Sync {
    /// Generates every event of `civil_year` (1 January to 31 December)
    /// localized for `language`.
    async fn generate(&self, civil_year: i32, language: Language)
        -> GeneratorResult<CivilYearEvents>;
}

#[async_trait]
impl<G> EventGenerator for Arc<G>
where
    G: EventGenerator + ?Sized,
{
    async fn generate(
        &self,
        civil_year: i32,
        language: Language,
    ) -> GeneratorResult<CivilYearEvents> {
        (**self).generate(civil_year, language).await
    }
}
