//! The resolution pass: from day buckets to a rendered-ready year.

use chrono::NaiveDate;

use crate::generator::EventGenerator;

use super::aggregate::{aggregate_events, DayBuckets};
use super::color::{resolve_badges, resolve_color};
use super::cycle::{cycle_for, Cycle};
use super::error::{LiturgyError, LiturgyResult};
use super::locale::{date_parts, Language};
use super::principal::principal_event;
use super::season::segment_seasons;
use super::tables::ui_strings;
use super::types::{LiturgicalYear, RawEvent, ResolvedDay, YearHeader};
use super::window::liturgical_window;

/// Resolves every day of the liturgical year ending in `end_year`.
///
/// Every date of the window needs a non-empty bucket; the first gap aborts
/// the pass with [`LiturgyError::MissingDay`]. The output depends only on
/// the arguments.
pub fn resolve_buckets(
    end_year: i32,
    buckets: &DayBuckets,
    language: Language,
) -> LiturgyResult<LiturgicalYear> {
    let window = liturgical_window(end_year)?;
    let cycle = cycle_for(end_year)?;

    let principals = window
        .days()
        .map(|date| match buckets.get(&date) {
            Some(bucket) => principal_event(bucket).map(|event| (date, event)),
            None => Err(LiturgyError::MissingDay(date)),
        })
        .collect::<LiturgyResult<Vec<(NaiveDate, &RawEvent)>>>()?;

    let marks = segment_seasons(principals.iter().map(|(_, event)| *event));

    let days: Vec<ResolvedDay> = principals
        .into_iter()
        .zip(marks)
        .map(|((date, principal), mark)| {
            let color = resolve_color(principal);
            ResolvedDay {
                date,
                principal: principal.clone(),
                color,
                badges: resolve_badges(principal, color, language),
                date_parts: date_parts(principal, date, language),
                banner_start: mark.banner.is_some(),
                season_key: mark.banner,
                season: mark.season,
                ordinary_block: mark.block,
            }
        })
        .collect();

    tracing::debug!(
        end_year,
        language = %language,
        days = days.len(),
        banners = days.iter().filter(|day| day.banner_start).count(),
        "Resolved liturgical year"
    );

    Ok(LiturgicalYear {
        end_year,
        language,
        window,
        header: year_header(end_year, &cycle, language),
        cycle,
        days,
    })
}

/// Fetches, aggregates and resolves one liturgical year.
pub async fn resolve_liturgical_year<G>(
    generator: &G,
    end_year: i32,
    language: Language,
) -> LiturgyResult<LiturgicalYear>
where
    G: EventGenerator + ?Sized,
{
    let buckets = aggregate_events(generator, end_year, language).await?;
    resolve_buckets(end_year, &buckets, language)
}

fn year_header(end_year: i32, cycle: &Cycle, language: Language) -> YearHeader {
    let strings = ui_strings(language);
    YearHeader {
        title: strings.title.to_string(),
        country_line: format!("{} • {} / {}", strings.country, end_year - 1, end_year),
        cycle_line: cycle.subtitle(language),
        today_label: strings.today_label.to_string(),
    }
}
