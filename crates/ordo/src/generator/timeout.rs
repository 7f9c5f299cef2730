//! Time-bounded generator decorator.

use std::time::Duration;

use async_trait::async_trait;

use ordo_core::generator::{CivilYearEvents, EventGenerator, GeneratorError, GeneratorResult};
use ordo_core::liturgy::Language;

/// Fails a generator call with [`GeneratorError::Timeout`] when it does not
/// complete within `timeout`.
///
/// # Type Parameters
///
/// * `G` - The wrapped generator
#[derive(Debug, Clone)]
pub struct TimeoutGenerator<G> {
    inner: G,
    timeout: Duration,
}

impl<G> TimeoutGenerator<G>
where
    G: EventGenerator,
{
    pub fn new(inner: G, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<G> EventGenerator for TimeoutGenerator<G>
where
    G: EventGenerator,
{
    async fn generate(
        &self,
        civil_year: i32,
        language: Language,
    ) -> GeneratorResult<CivilYearEvents> {
        match tokio::time::timeout(self.timeout, self.inner.generate(civil_year, language)).await {
            Ok(result) => result,
            Err(_) => {
                let millis = self.timeout.as_millis() as u64;
                tracing::warn!(civil_year, timeout_ms = millis, "Generator timed out");
                Err(GeneratorError::Timeout(millis))
            }
        }
    }
}
