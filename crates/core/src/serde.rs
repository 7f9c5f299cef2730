//! Serde helpers for reading generator output.
//!
//! The external generator emits JSON with a few quirks: dates come either as
//! plain `YYYY-MM-DD` strings or as full UTC timestamps, optional lists are
//! sometimes `null`, and the week of the season may live under a nested
//! `calendar` object.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use crate::liturgy::{RawEvent, Rank};

/// Deserialize a date given as `YYYY-MM-DD` or as an RFC 3339 timestamp.
/// Timestamps are converted to UTC before taking the calendar date.
pub fn deserialize_event_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_event_date(&s).map_err(serde::de::Error::custom)
}

/// Parses a generator date string.
pub fn parse_event_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|e| format!("invalid event date {s:?}: {e}"))
}

/// Deserialize a value, treating `null` as the type's default.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Wire shape of a generator event, converted into [`RawEvent`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEventRecord {
    #[serde(deserialize_with = "deserialize_event_date")]
    date: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    rank: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    rank_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    seasons: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    periods: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    colors: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    is_holy_day_of_obligation: bool,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    id: String,
    #[serde(default)]
    week_of_season: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    season_names: Vec<String>,
    #[serde(default)]
    calendar: Option<EventCalendarRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventCalendarRecord {
    #[serde(default)]
    week_of_season: Option<u32>,
}

impl From<RawEventRecord> for RawEvent {
    fn from(record: RawEventRecord) -> Self {
        let week_of_season = record
            .week_of_season
            .or_else(|| record.calendar.and_then(|c| c.week_of_season));

        Self {
            date: record.date,
            rank: Rank::from_tag(&record.rank),
            rank_name: record.rank_name,
            name: record.name,
            seasons: record.seasons,
            periods: record.periods,
            colors: record.colors,
            is_holy_day_of_obligation: record.is_holy_day_of_obligation,
            id: record.id,
            week_of_season,
            season_names: record.season_names,
        }
    }
}
