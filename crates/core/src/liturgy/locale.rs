//! Language selection and localized date texts.

use chrono::{Datelike, Locale, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::tables::{
    latin_month, latin_weekday, ui_strings, LATIN_HOURS, LATIN_LONG_MONTHS, LATIN_LONG_WEEKDAYS,
};
use super::types::{DateParts, RawEvent};

/// Display language of a resolved year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "la")]
    Latin,
}

impl Language {
    /// Parses a language code. Anything other than `la` is Spanish.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "la" => Language::Latin,
            "es" => Language::Spanish,
            other => {
                tracing::debug!(code = %other, "Unknown language code, using Spanish");
                Language::Spanish
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::Latin => "la",
        }
    }

    /// Name of the generator locale bundle for this language.
    pub fn bundle_name(&self) -> &'static str {
        match self {
            Language::Spanish => "Spain_Es",
            Language::Latin => "Spain_La",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

fn format_spanish(date: NaiveDate, fmt: &str) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(fmt, Locale::es_ES)
        .to_string()
}

/// Lowercase English abbreviation of a date component, the key of the
/// Latin tables.
fn english_key(date: NaiveDate, fmt: &str) -> String {
    date.format(fmt).to_string().to_ascii_lowercase()
}

/// Builds the localized date pieces shown next to a principal event.
pub fn date_parts(event: &RawEvent, date: NaiveDate, language: Language) -> DateParts {
    let (day_name, month_name) = match language {
        Language::Spanish => (format_spanish(date, "%a"), format_spanish(date, "%b")),
        Language::Latin => {
            let day = english_key(date, "%a");
            let month = english_key(date, "%b");
            (
                latin_weekday(&day).map(str::to_string).unwrap_or(day),
                latin_month(&month).map(str::to_string).unwrap_or(month),
            )
        }
    };

    DateParts {
        day_name,
        month_name,
        week_text: week_text(event, language),
        day_number: date.day(),
    }
}

/// "Semana 3 de Adviento", or empty when the event carries no week number
/// or no season name.
fn week_text(event: &RawEvent, language: Language) -> String {
    let season_name = event
        .season_names
        .first()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty());

    match (event.week_of_season, season_name) {
        (Some(week), Some(name)) if week > 0 => {
            let strings = ui_strings(language);
            format!(
                "{} {} {} {}",
                strings.week_word, week, strings.week_connective, name
            )
        }
        _ => String::new(),
    }
}

const ROMAN_NUMERALS: [(&str, u32); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Converts a number to Roman numerals. Zero yields an empty string.
pub fn to_roman(mut n: u32) -> String {
    let mut out = String::new();
    for (letter, value) in ROMAN_NUMERALS {
        while n >= value {
            out.push_str(letter);
            n -= value;
        }
    }
    out
}

/// Full date line for a "today" heading.
///
/// Spanish uses the locale's long names with the first letter capitalized;
/// Latin spells the day and year in Roman numerals.
pub fn long_date_text(date: NaiveDate, language: Language) -> String {
    match language {
        Language::Spanish => capitalize(&format_spanish(date, "%A, %-d de %B de %Y")),
        Language::Latin => {
            let weekday = LATIN_LONG_WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
            let month = LATIN_LONG_MONTHS[date.month0() as usize];
            let year = u32::try_from(date.year()).unwrap_or_default();
            format!(
                "{weekday}, die {} mensis {month}, Anno Domini {}",
                to_roman(date.day()),
                to_roman(year)
            )
        }
    }
}

/// First hour of daylight and first hour of night.
const DAWN_HOUR: u32 = 6;
const NIGHTFALL_HOUR: u32 = 19;

/// Whether `time` falls in the night, before 06:00 or from 19:00 on.
pub fn is_night(time: NaiveTime) -> bool {
    let hour = time.hour();
    hour < DAWN_HOUR || hour >= NIGHTFALL_HOUR
}

/// Clock line for a "today" heading.
///
/// Spanish is a 12-hour clock ("7:05 PM"). Latin names the canonical hour
/// or night watch ("HORA SEXTA", "PRIMA VIGILIA").
pub fn time_text(time: NaiveTime, language: Language) -> String {
    match language {
        Language::Spanish => {
            let (pm, hour) = time.hour12();
            let suffix = if pm { "PM" } else { "AM" };
            format!("{hour}:{:02} {suffix}", time.minute())
        }
        Language::Latin => LATIN_HOURS[time.hour() as usize].to_uppercase(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::liturgy::types::Rank;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_event(date: NaiveDate) -> RawEvent {
        RawEvent::new(date, "advent_3_sunday", "Domingo III de Adviento", Rank::Sunday)
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("la"), Language::Latin);
        assert_eq!(Language::from_code("LA"), Language::Latin);
        assert_eq!(Language::from_code("es"), Language::Spanish);
        assert_eq!(Language::from_code("fr"), Language::Spanish);
        assert_eq!(Language::from_code(""), Language::Spanish);
        assert_eq!(Language::default(), Language::Spanish);
        assert_eq!(Language::Latin.bundle_name(), "Spain_La");
    }

    #[test]
    fn test_language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Latin).unwrap(), "\"la\"");
        let parsed: Language = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(parsed, Language::Spanish);
    }

    #[test]
    fn test_latin_date_parts() {
        // 2024-12-15 is a Sunday.
        let date = make_date(2024, 12, 15);
        let parts = date_parts(&make_event(date), date, Language::Latin);

        assert_eq!(parts.day_name, "Dom.");
        assert_eq!(parts.month_name, "Dec.");
        assert_eq!(parts.day_number, 15);
        assert_eq!(parts.week_text, "");
    }

    #[test]
    fn test_latin_tables_follow_the_calendar() {
        let date = make_date(2025, 4, 18);
        let parts = date_parts(&make_event(date), date, Language::Latin);
        assert_eq!(parts.day_name, "Fer. VI");
        assert_eq!(parts.month_name, "Apr.");
    }

    #[test]
    fn test_spanish_date_parts() {
        let date = make_date(2025, 1, 6);
        let parts = date_parts(&make_event(date), date, Language::Spanish);

        assert_eq!(parts.month_name, "ene");
        assert!(!parts.day_name.is_empty());
        assert_eq!(parts.day_number, 6);
    }

    #[test]
    fn test_week_text() {
        let date = make_date(2024, 12, 15);
        let event = make_event(date).with_week(3, "Adviento");

        let spanish = date_parts(&event, date, Language::Spanish);
        assert_eq!(spanish.week_text, "Semana 3 de Adviento");

        let event = make_event(date).with_week(3, "Adventus");
        let latin = date_parts(&event, date, Language::Latin);
        assert_eq!(latin.week_text, "Hebdomada 3 de Adventus");
    }

    #[test]
    fn test_week_text_needs_week_and_name() {
        let date = make_date(2024, 12, 15);

        let mut no_name = make_event(date);
        no_name.week_of_season = Some(2);
        assert_eq!(date_parts(&no_name, date, Language::Spanish).week_text, "");

        let zero_week = make_event(date).with_week(0, "Adviento");
        assert_eq!(date_parts(&zero_week, date, Language::Spanish).week_text, "");
    }

    #[test]
    fn test_to_roman() {
        assert_eq!(to_roman(0), "");
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(17), "XVII");
        assert_eq!(to_roman(1994), "MCMXCIV");
        assert_eq!(to_roman(2026), "MMXXVI");
    }

    fn make_time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_latin_time_text_boundaries() {
        assert_eq!(time_text(make_time(0, 0), Language::Latin), "MEDIA NOX");
        assert_eq!(time_text(make_time(5, 59), Language::Latin), "QUINTA VIGILIA");
        assert_eq!(time_text(make_time(6, 0), Language::Latin), "HORA PRIMA");
        assert_eq!(time_text(make_time(11, 30), Language::Latin), "HORA SEXTA");
        assert_eq!(time_text(make_time(12, 0), Language::Latin), "HORA SEXTA");
        assert_eq!(time_text(make_time(18, 59), Language::Latin), "HORA DUODECIMA");
        assert_eq!(time_text(make_time(19, 0), Language::Latin), "PRIMA VIGILIA");
        assert_eq!(time_text(make_time(23, 59), Language::Latin), "QUINTA VIGILIA");
    }

    #[test]
    fn test_spanish_time_text_midnight_and_noon() {
        assert_eq!(time_text(make_time(0, 5), Language::Spanish), "12:05 AM");
        assert_eq!(time_text(make_time(12, 30), Language::Spanish), "12:30 PM");
        assert_eq!(time_text(make_time(9, 7), Language::Spanish), "9:07 AM");
        assert_eq!(time_text(make_time(23, 0), Language::Spanish), "11:00 PM");
    }

    #[test]
    fn test_night_flag_boundaries() {
        assert!(is_night(make_time(0, 0)));
        assert!(is_night(make_time(5, 59)));
        assert!(!is_night(make_time(6, 0)));
        assert!(!is_night(make_time(12, 0)));
        assert!(!is_night(make_time(18, 59)));
        assert!(is_night(make_time(19, 0)));
        assert!(is_night(make_time(23, 59)));
    }

    #[test]
    fn test_long_date_text() {
        let date = make_date(2026, 10, 17);
        assert_eq!(
            long_date_text(date, Language::Latin),
            "Die Saturni, die XVII mensis Octobris, Anno Domini MMXXVI"
        );

        let spanish = long_date_text(date, Language::Spanish);
        assert!(spanish.ends_with("17 de octubre de 2026"), "{spanish}");
        assert!(spanish.starts_with('S'), "{spanish}");
    }
}
