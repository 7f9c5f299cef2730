//! Liturgical year boundaries.
//!
//! A liturgical year runs from the First Sunday of Advent to the Saturday
//! before the next First Sunday of Advent. It is named after the civil year
//! in which it ends (the "end year").

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::{LiturgyError, LiturgyResult};

/// Smallest supported end year (the preceding civil year must be Gregorian).
pub const MIN_END_YEAR: i32 = 1584;
/// Largest supported end year.
pub const MAX_END_YEAR: i32 = 9999;

/// Inclusive date range of one liturgical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiturgicalWindow {
    /// First Sunday of Advent.
    pub start: NaiveDate,
    /// Saturday before the next First Sunday of Advent.
    pub end: NaiveDate,
}

impl LiturgicalWindow {
    /// Returns true if `date` falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterates every date of the window in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }

    /// Number of days in the window (always 364 or 371).
    pub fn len_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }
}

/// Rejects end years outside the supported range.
pub fn validate_end_year(end_year: i32) -> LiturgyResult<()> {
    if !(MIN_END_YEAR..=MAX_END_YEAR).contains(&end_year) {
        return Err(LiturgyError::InvalidYear {
            year: end_year,
            min: MIN_END_YEAR,
            max: MAX_END_YEAR,
        });
    }
    Ok(())
}

/// Returns the First Sunday of Advent of a civil year.
///
/// That is the fourth Sunday before Christmas, which always falls between
/// 27 November and 3 December.
pub fn advent_start(civil_year: i32) -> Option<NaiveDate> {
    let earliest = NaiveDate::from_ymd_opt(civil_year, 11, 27)?;
    let offset = (7 - earliest.weekday().num_days_from_sunday()) % 7;
    Some(earliest + Duration::days(i64::from(offset)))
}

/// Computes the window of the liturgical year ending in `end_year`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ordo_core::liturgy::liturgical_window;
///
/// let window = liturgical_window(2025).unwrap();
/// assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
/// assert_eq!(window.end, NaiveDate::from_ymd_opt(2025, 11, 29).unwrap());
/// ```
pub fn liturgical_window(end_year: i32) -> LiturgyResult<LiturgicalWindow> {
    validate_end_year(end_year)?;

    let invalid = || LiturgyError::InvalidYear {
        year: end_year,
        min: MIN_END_YEAR,
        max: MAX_END_YEAR,
    };
    let start = advent_start(end_year - 1).ok_or_else(invalid)?;
    let end = advent_start(end_year)
        .and_then(|next| next.pred_opt())
        .ok_or_else(invalid)?;

    Ok(LiturgicalWindow { start, end })
}

/// Returns the end year of the liturgical year containing `date`.
///
/// Dates from the First Sunday of Advent onwards belong to the next year.
pub fn liturgical_year_of(date: NaiveDate) -> LiturgyResult<i32> {
    let civil_year = date.year();
    let end_year = match advent_start(civil_year) {
        Some(advent) if date >= advent => civil_year + 1,
        _ => civil_year,
    };
    validate_end_year(end_year)?;
    Ok(end_year)
}
