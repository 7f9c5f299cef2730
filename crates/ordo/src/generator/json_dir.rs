//! Generator reading exports of the external library from disk.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;

use ordo_core::generator::{CivilYearEvents, EventGenerator, GeneratorError, GeneratorResult};
use ordo_core::liturgy::{Language, RawEvent};

/// Reads `<root>/<bundle>/<year>.json` files, one per civil year and
/// language bundle (`Spain_Es`, `Spain_La`).
#[derive(Debug, Clone)]
pub struct JsonDirGenerator {
    root: PathBuf,
}

/// Accepted export layouts: the library's date-keyed object, or a flat list.
#[derive(Deserialize)]
#[serde(untagged)]
enum Export {
    ByDate(BTreeMap<String, Vec<RawEvent>>),
    Flat(Vec<RawEvent>),
}

impl JsonDirGenerator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the export path of a civil year.
    pub fn path_for(&self, civil_year: i32, language: Language) -> PathBuf {
        self.root
            .join(language.bundle_name())
            .join(format!("{civil_year}.json"))
    }
}

/// Parses an export and keys its events by their own date, keeping the
/// export order within each day.
pub fn parse_export(json: &str) -> GeneratorResult<CivilYearEvents> {
    let export: Export =
        serde_json::from_str(json).map_err(|e| GeneratorError::Malformed(e.to_string()))?;

    let events: Vec<RawEvent> = match export {
        Export::ByDate(by_date) => by_date.into_values().flatten().collect(),
        Export::Flat(events) => events,
    };

    let mut year = CivilYearEvents::new();
    for event in events {
        year.entry(event.date).or_default().push(event);
    }
    Ok(year)
}

#[async_trait]
impl EventGenerator for JsonDirGenerator {
    async fn generate(
        &self,
        civil_year: i32,
        language: Language,
    ) -> GeneratorResult<CivilYearEvents> {
        let path = self.path_for(civil_year, language);

        let json = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => GeneratorError::NotFound {
                    year: civil_year,
                    bundle: language.bundle_name(),
                },
                _ => GeneratorError::Unavailable(format!("{}: {e}", path.display())),
            })?;

        let year = parse_export(&json)?;
        tracing::debug!(
            civil_year,
            path = %path.display(),
            days = year.len(),
            "Loaded generator export"
        );
        Ok(year)
    }
}
