//! Generator backed by built-in sample data.

use async_trait::async_trait;

use ordo_core::generator::{CivilYearEvents, EventGenerator, GeneratorError, GeneratorResult};
use ordo_core::liturgy::{generate_sample_year, Language};

/// Synthesizes demo years; see [`generate_sample_year`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleGenerator;

#[async_trait]
impl EventGenerator for SampleGenerator {
    async fn generate(
        &self,
        civil_year: i32,
        language: Language,
    ) -> GeneratorResult<CivilYearEvents> {
        generate_sample_year(civil_year, language).ok_or(GeneratorError::NotFound {
            year: civil_year,
            bundle: language.bundle_name(),
        })
    }
}
