//! Merging generator output into per-day buckets.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::generator::{CivilYearEvents, EventGenerator};

use super::error::{LiturgyError, LiturgyResult};
use super::locale::Language;
use super::types::RawEvent;
use super::window::{liturgical_window, LiturgicalWindow};

/// Events of each date in a liturgical year, in generator order.
/// A bucket is never empty once created.
pub type DayBuckets = BTreeMap<NaiveDate, Vec<RawEvent>>;

/// Returns the sortable `YYYY-MM-DD` key of a date.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Groups the events that fall inside `window` by date.
///
/// Events keep their relative order inside each bucket. Dates without
/// events get no bucket.
pub fn bucket_events<I>(events: I, window: &LiturgicalWindow) -> DayBuckets
where
    I: IntoIterator<Item = RawEvent>,
{
    let mut buckets = DayBuckets::new();

    for event in events.into_iter().filter(|e| window.contains(e.date)) {
        buckets.entry(event.date).or_default().push(event);
    }

    buckets
}

/// Fetches both civil years overlapping the liturgical year ending in
/// `end_year` and buckets their events by date.
///
/// The two requests run concurrently and both must succeed. Events of the
/// earlier civil year come first.
pub async fn aggregate_events<G>(
    generator: &G,
    end_year: i32,
    language: Language,
) -> LiturgyResult<DayBuckets>
where
    G: EventGenerator + ?Sized,
{
    let window = liturgical_window(end_year)?;

    let (previous, current) = tokio::try_join!(
        fetch_civil_year(generator, end_year - 1, language),
        fetch_civil_year(generator, end_year, language),
    )?;

    let events = previous
        .into_values()
        .flatten()
        .chain(current.into_values().flatten());
    let buckets = bucket_events(events, &window);

    tracing::debug!(
        end_year,
        days = buckets.len(),
        start = %window.start,
        end = %window.end,
        "Aggregated generator events"
    );

    Ok(buckets)
}

async fn fetch_civil_year<G>(
    generator: &G,
    civil_year: i32,
    language: Language,
) -> LiturgyResult<CivilYearEvents>
where
    G: EventGenerator + ?Sized,
{
    generator
        .generate(civil_year, language)
        .await
        .map_err(|source| {
            tracing::warn!(civil_year, error = %source, "Event generation failed");
            LiturgyError::Upstream {
                year: civil_year,
                source,
            }
        })
}
