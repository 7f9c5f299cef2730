//! Reading cycles of a liturgical year.

use serde::{Deserialize, Serialize};

use super::error::LiturgyResult;
use super::locale::Language;
use super::tables::ui_strings;
use super::window::validate_end_year;

/// Anchor year whose liturgical year uses Sunday cycle C.
const CYCLE_ANCHOR_YEAR: i32 = 2022;

/// Three-year Sunday lectionary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SundayCycle {
    A,
    B,
    C,
}

impl SundayCycle {
    const SEQUENCE: [SundayCycle; 3] = [SundayCycle::C, SundayCycle::A, SundayCycle::B];

    pub fn letter(&self) -> &'static str {
        match self {
            SundayCycle::A => "A",
            SundayCycle::B => "B",
            SundayCycle::C => "C",
        }
    }
}

/// Two-year weekday lectionary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekdayCycle {
    I,
    II,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    pub end_year: i32,
    pub sunday: SundayCycle,
    pub weekday: WeekdayCycle,
}

impl Cycle {
    pub fn is_year_two(&self) -> bool {
        self.weekday == WeekdayCycle::II
    }

    /// "Ciclo C • Año Par (II)" style subtitle.
    pub fn subtitle(&self, language: Language) -> String {
        let strings = ui_strings(language);
        let parity = match self.weekday {
            WeekdayCycle::II => strings.even_year,
            WeekdayCycle::I => strings.odd_year,
        };
        format!(
            "{} {} • {} {}",
            strings.cycle_word,
            self.sunday.letter(),
            strings.year_word,
            parity
        )
    }
}

/// Derives the reading cycles of the liturgical year ending in `end_year`.
pub fn cycle_for(end_year: i32) -> LiturgyResult<Cycle> {
    validate_end_year(end_year)?;

    let index = (end_year - CYCLE_ANCHOR_YEAR).rem_euclid(3) as usize;
    let weekday = if end_year % 2 == 0 {
        WeekdayCycle::II
    } else {
        WeekdayCycle::I
    };

    Ok(Cycle {
        end_year,
        sunday: SundayCycle::SEQUENCE[index],
        weekday,
    })
}
