//! Command implementations, independent of argument parsing and printing.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use ordo_core::generator::EventGenerator;
use ordo_core::liturgy::{
    cycle_for, is_night, liturgical_window, liturgical_year_of, long_date_text,
    resolve_liturgical_year, time_text, Cycle, Language, LiturgicalWindow, LiturgicalYear,
    ResolvedDay, YearHeader,
};

use crate::error::{OrdoError, Result};

/// A single resolved day with the heading of its year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    pub end_year: i32,
    pub header: YearHeader,
    /// Full date line, e.g. "Sábado, 17 de octubre de 2026".
    pub long_date: String,
    /// Clock line, e.g. "7:05 PM" or "PRIMA VIGILIA".
    pub time_text: String,
    pub is_night: bool,
    pub day: ResolvedDay,
}

/// Bounds of a liturgical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowReport {
    pub end_year: i32,
    pub window: LiturgicalWindow,
    pub days: usize,
}

/// Resolves the liturgical year ending in `end_year`.
pub async fn year<G>(generator: &G, end_year: i32, language: Language) -> Result<LiturgicalYear>
where
    G: EventGenerator + ?Sized,
{
    let year = resolve_liturgical_year(generator, end_year, language).await?;
    tracing::info!(end_year, days = year.days.len(), "Resolved liturgical year");
    Ok(year)
}

/// Resolves the liturgical year containing `date` and extracts that day.
///
/// `time` only feeds the clock line of the report.
pub async fn day<G>(
    generator: &G,
    date: NaiveDate,
    time: NaiveTime,
    language: Language,
) -> Result<DayReport>
where
    G: EventGenerator + ?Sized,
{
    let end_year = liturgical_year_of(date)?;
    let year = resolve_liturgical_year(generator, end_year, language).await?;

    let day = year
        .day(date)
        .cloned()
        .ok_or(OrdoError::DayNotResolved(date))?;

    Ok(DayReport {
        end_year,
        header: year.header,
        long_date: long_date_text(date, language),
        time_text: time_text(time, language),
        is_night: is_night(time),
        day,
    })
}

pub fn window(end_year: i32) -> Result<WindowReport> {
    let window = liturgical_window(end_year)?;
    Ok(WindowReport {
        end_year,
        days: window.len_days(),
        window,
    })
}

pub fn cycle(end_year: i32) -> Result<Cycle> {
    Ok(cycle_for(end_year)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SampleGenerator;
    use ordo_core::liturgy::{ColorKey, LiturgyError, SeasonKey};

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[tokio::test]
    async fn test_year_command() {
        let year = year(&SampleGenerator, 2025, Language::Latin).await.unwrap();
        assert_eq!(year.days.len(), 364);
        assert_eq!(year.days[0].season_key, Some(SeasonKey::Advent));
    }

    #[tokio::test]
    async fn test_day_command_picks_the_right_year() {
        // First Sunday of Advent 2025 belongs to the year ending in 2026.
        let date = make_date(2025, 11, 30);
        let report = day(&SampleGenerator, date, make_time(10, 0), Language::Spanish)
            .await
            .unwrap();

        assert_eq!(report.end_year, 2026);
        assert_eq!(report.day.principal.id, "advent_1_sunday");
        assert_eq!(report.day.color, ColorKey::Violet);
        assert!(report.day.banner_start);
        assert_eq!(report.header.country_line, "España • 2025 / 2026");
    }

    #[tokio::test]
    async fn test_day_command_long_date() {
        let date = make_date(2026, 10, 17);
        let report = day(&SampleGenerator, date, make_time(19, 30), Language::Latin)
            .await
            .unwrap();
        assert_eq!(
            report.long_date,
            "Die Saturni, die XVII mensis Octobris, Anno Domini MMXXVI"
        );
        assert_eq!(report.time_text, "PRIMA VIGILIA");
        assert!(report.is_night);
    }

    #[tokio::test]
    async fn test_day_command_spanish_clock() {
        let date = make_date(2026, 10, 17);
        let report = day(&SampleGenerator, date, make_time(12, 30), Language::Spanish)
            .await
            .unwrap();
        assert_eq!(report.time_text, "12:30 PM");
        assert!(!report.is_night);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["time_text"], "12:30 PM");
        assert_eq!(json["is_night"], false);
    }

    #[test]
    fn test_window_command() {
        let report = window(2025).unwrap();
        assert_eq!(report.window.start, make_date(2024, 12, 1));
        assert_eq!(report.window.end, make_date(2025, 11, 29));
        assert_eq!(report.days, 364);
    }

    #[test]
    fn test_invalid_year_is_reported() {
        assert!(matches!(
            cycle(99),
            Err(OrdoError::Liturgy(LiturgyError::InvalidYear { year: 99, .. }))
        ));
        assert!(window(10_000).is_err());
    }
}
