//! Sample generator output for demos and tests.
//!
//! This module contains pure functions that synthesize a plausible civil
//! year of events: the temporal cycle derived from the Easter date plus a
//! handful of fixed solemnities. It is demo data, not a rules engine; the
//! real calendar comes from the external generator.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::generator::CivilYearEvents;

use super::locale::{to_roman, Language};
use super::season::{EASTER_OCTAVE_PERIOD, HOLY_WEEK_PERIOD};
use super::types::{RawEvent, Rank};
use super::window::advent_start;

/// Computes Easter Sunday of a Gregorian year (anonymous Gregorian
/// algorithm). Returns `None` before 1583.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if year < 1583 {
        return None;
    }

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;

    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Generates one civil year of sample events, keyed by date.
///
/// Every day gets a temporal event. Fixed solemnities and feasts are listed
/// before it, so they win precedence ties against Sundays.
///
/// # Example
///
/// ```
/// use ordo_core::liturgy::{generate_sample_year, Language};
///
/// let year = generate_sample_year(2025, Language::Spanish).unwrap();
/// assert_eq!(year.len(), 365);
/// ```
pub fn generate_sample_year(civil_year: i32, language: Language) -> Option<CivilYearEvents> {
    let markers = YearMarkers::new(civil_year)?;
    let first = NaiveDate::from_ymd_opt(civil_year, 1, 1)?;

    let events = first
        .iter_days()
        .take_while(|date| date.year() == civil_year)
        .map(|date| {
            let temporal = markers.temporal_event(date, language);
            let mut day: Vec<RawEvent> = SANCTORAL
                .iter()
                .filter(|fixed| fixed.month == date.month() && fixed.day == date.day())
                .map(|fixed| fixed.to_event(date, &temporal, language))
                .collect();
            day.push(temporal);
            (date, day)
        })
        .collect();

    Some(events)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tempus {
    Advent,
    Christmas,
    Ordinary,
    Lent,
    Triduum,
    Easter,
}

impl Tempus {
    fn tag(self) -> &'static str {
        match self {
            Tempus::Advent => "ADVENT",
            Tempus::Christmas => "CHRISTMAS_TIME",
            Tempus::Ordinary => "ORDINARY_TIME",
            Tempus::Lent => "LENT",
            Tempus::Triduum => "PASCHAL_TRIDUUM",
            Tempus::Easter => "EASTER_TIME",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Tempus::Advent => "advent",
            Tempus::Christmas => "christmas_time",
            Tempus::Ordinary => "ordinary_time",
            Tempus::Lent => "lent",
            Tempus::Triduum => "paschal_triduum",
            Tempus::Easter => "easter_time",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Tempus::Advent => "VIOLET",
            Tempus::Christmas | Tempus::Easter => "WHITE",
            Tempus::Ordinary => "GREEN",
            Tempus::Lent => "PURPLE",
            Tempus::Triduum => "RED",
        }
    }

    fn name(self, language: Language) -> &'static str {
        match (self, language) {
            (Tempus::Advent, Language::Spanish) => "Adviento",
            (Tempus::Advent, Language::Latin) => "Adventus",
            (Tempus::Christmas, Language::Spanish) => "Navidad",
            (Tempus::Christmas, Language::Latin) => "Nativitatis",
            (Tempus::Ordinary, Language::Spanish) => "Tiempo Ordinario",
            (Tempus::Ordinary, Language::Latin) => "per Annum",
            (Tempus::Lent, Language::Spanish) => "Cuaresma",
            (Tempus::Lent, Language::Latin) => "Quadragesimæ",
            (Tempus::Triduum, Language::Spanish) => "Triduo Pascual",
            (Tempus::Triduum, Language::Latin) => "Triduum Paschale",
            (Tempus::Easter, Language::Spanish) => "Pascua",
            (Tempus::Easter, Language::Latin) => "Paschæ",
        }
    }
}

fn rank_name(rank: &Rank, language: Language) -> &'static str {
    match (rank, language) {
        (Rank::Solemnity, Language::Spanish) => "Solemnidad",
        (Rank::Solemnity, Language::Latin) => "Sollemnitas",
        (Rank::Sunday, Language::Spanish) => "Domingo",
        (Rank::Sunday, Language::Latin) => "Dominica",
        (Rank::Feast, Language::Spanish) => "Fiesta",
        (Rank::Feast, Language::Latin) => "Festum",
        (Rank::Memorial, _) => "Memoria",
        (Rank::Feria | Rank::Weekday, _) => "Feria",
        (Rank::Other(_), Language::Spanish) => "Triduo",
        (Rank::Other(_), Language::Latin) => "Triduum",
    }
}

/// Movable dates that bound the seasons of one civil year.
#[derive(Debug)]
struct YearMarkers {
    baptism: NaiveDate,
    ash_wednesday: NaiveDate,
    palm_sunday: NaiveDate,
    holy_thursday: NaiveDate,
    easter: NaiveDate,
    octave_end: NaiveDate,
    pentecost: NaiveDate,
    advent: NaiveDate,
}

impl YearMarkers {
    fn new(year: i32) -> Option<Self> {
        let easter = easter_sunday(year)?;
        let epiphany = NaiveDate::from_ymd_opt(year, 1, 6)?;
        let to_sunday = 7 - epiphany.weekday().num_days_from_sunday();

        Some(Self {
            baptism: epiphany.checked_add_days(Days::new(u64::from(to_sunday)))?,
            ash_wednesday: easter.checked_sub_days(Days::new(46))?,
            palm_sunday: easter.checked_sub_days(Days::new(7))?,
            holy_thursday: easter.checked_sub_days(Days::new(3))?,
            easter,
            octave_end: easter.checked_add_days(Days::new(7))?,
            pentecost: easter.checked_add_days(Days::new(49))?,
            advent: advent_start(year)?,
        })
    }

    /// Season and week number of a date. Week 0 means no numbered week.
    fn tempus(&self, date: NaiveDate) -> (Tempus, u32) {
        let weeks_since = |from: NaiveDate| ((date - from).num_days() / 7) as u32;

        if date <= self.baptism {
            (Tempus::Christmas, 0)
        } else if date < self.ash_wednesday {
            (Tempus::Ordinary, weeks_since(self.baptism) + 1)
        } else if date < self.holy_thursday {
            let first_sunday = self.ash_wednesday + Days::new(4);
            if date < first_sunday {
                (Tempus::Lent, 0)
            } else {
                (Tempus::Lent, weeks_since(first_sunday) + 1)
            }
        } else if date < self.easter {
            (Tempus::Triduum, 0)
        } else if date <= self.pentecost {
            (Tempus::Easter, weeks_since(self.easter) + 1)
        } else if date < self.advent {
            let before_advent = (self.advent - date).num_days() - 1;
            let week = (34 - before_advent / 7).max(1);
            (Tempus::Ordinary, week as u32)
        } else if date.month() == 12 && date.day() >= 25 {
            (Tempus::Christmas, 0)
        } else {
            (Tempus::Advent, weeks_since(self.advent) + 1)
        }
    }

    fn temporal_event(&self, date: NaiveDate, language: Language) -> RawEvent {
        let (tempus, week) = self.tempus(date);
        let season_name = tempus.name(language);
        let spanish = language == Language::Spanish;
        let pick = |es: &'static str, la: &'static str| if spanish { es } else { la };

        let (id, name, rank, color) = if date == self.easter {
            let name = pick("Domingo de Resurrección", "Dominica Resurrectionis");
            ("easter_sunday".to_string(), name.to_string(), Rank::Solemnity, "WHITE")
        } else if date == self.pentecost {
            let name = pick("Domingo de Pentecostés", "Dominica Pentecostes");
            ("pentecost_sunday".to_string(), name.to_string(), Rank::Solemnity, "RED")
        } else if date == self.palm_sunday {
            let name = pick("Domingo de Ramos", "Dominica in Palmis");
            ("palm_sunday".to_string(), name.to_string(), Rank::Sunday, "RED")
        } else if date == self.ash_wednesday {
            let name = pick("Miércoles de Ceniza", "Feria IV Cinerum");
            ("ash_wednesday".to_string(), name.to_string(), Rank::Weekday, "PURPLE")
        } else if tempus == Tempus::Triduum {
            let (id, name, color) = match date.weekday() {
                Weekday::Thu => (
                    "holy_thursday",
                    pick("Jueves Santo", "Feria V in Cena Domini"),
                    "WHITE",
                ),
                Weekday::Fri => (
                    "good_friday",
                    pick("Viernes Santo", "Feria VI in Passione Domini"),
                    "RED",
                ),
                _ => (
                    "holy_saturday",
                    pick("Sábado Santo", "Sabbatum Sanctum"),
                    "VIOLET",
                ),
            };
            (id.to_string(), name.to_string(), Rank::Other("TRIDUUM".to_string()), color)
        } else if date.weekday() == Weekday::Sun {
            let id = if week == 0 {
                format!("{}_sunday", tempus.slug())
            } else {
                format!("{}_{}_sunday", tempus.slug(), week)
            };
            let name = match (spanish, week) {
                (true, 0) => format!("Domingo de {season_name}"),
                (true, _) => format!("Domingo {} de {season_name}", to_roman(week)),
                (false, 0) => format!("Dominica {season_name}"),
                (false, _) => format!("Dominica {} {season_name}", to_roman(week)),
            };
            (id, name, Rank::Sunday, tempus.color())
        } else {
            let weekday = date.format("%A").to_string().to_ascii_lowercase();
            let id = format!("{}_{}_{}", tempus.slug(), week, weekday);
            let name = if spanish {
                format!("Feria de {season_name}")
            } else {
                format!("Feria {season_name}")
            };
            (id, name, Rank::Weekday, tempus.color())
        };

        let rank_label = rank_name(&rank, language);
        let mut event = RawEvent::new(date, id, name, rank)
            .with_rank_name(rank_label)
            .with_season(tempus.tag())
            .with_color(color);

        if week > 0 {
            event = event.with_week(week, season_name);
        } else {
            event.season_names.push(season_name.to_string());
        }
        if date >= self.palm_sunday && date < self.holy_thursday {
            event = event.with_period(HOLY_WEEK_PERIOD);
        }
        if date >= self.easter && date <= self.octave_end {
            event = event.with_period(EASTER_OCTAVE_PERIOD);
        }

        event
    }
}

/// A celebration on a fixed calendar date.
struct FixedCelebration {
    month: u32,
    day: u32,
    id: &'static str,
    spanish: &'static str,
    latin: &'static str,
    rank: Rank,
    color: &'static str,
    obligation: bool,
}

impl FixedCelebration {
    /// Builds the event, borrowing the calendar placement of the day's
    /// temporal event.
    fn to_event(&self, date: NaiveDate, temporal: &RawEvent, language: Language) -> RawEvent {
        let name = match language {
            Language::Spanish => self.spanish,
            Language::Latin => self.latin,
        };
        let mut event = RawEvent::new(date, self.id, name, self.rank.clone())
            .with_rank_name(rank_name(&self.rank, language))
            .with_color(self.color);

        event.seasons = temporal.seasons.clone();
        event.season_names = temporal.season_names.clone();
        event.periods = temporal.periods.clone();
        event.week_of_season = temporal.week_of_season;
        event.is_holy_day_of_obligation = self.obligation;
        event
    }
}

static SANCTORAL: [FixedCelebration; 11] = [
    FixedCelebration {
        month: 1,
        day: 1,
        id: "mary_mother_of_god",
        spanish: "Santa María, Madre de Dios",
        latin: "Sanctæ Dei Genetricis Mariæ",
        rank: Rank::Solemnity,
        color: "WHITE",
        obligation: true,
    },
    FixedCelebration {
        month: 1,
        day: 6,
        id: "epiphany",
        spanish: "Epifanía del Señor",
        latin: "In Epiphania Domini",
        rank: Rank::Solemnity,
        color: "WHITE",
        obligation: true,
    },
    FixedCelebration {
        month: 1,
        day: 17,
        id: "anthony_of_egypt_abbot",
        spanish: "San Antonio, abad",
        latin: "S. Antonii, abbatis",
        rank: Rank::Memorial,
        color: "WHITE",
        obligation: false,
    },
    FixedCelebration {
        month: 2,
        day: 2,
        id: "presentation_of_the_lord",
        spanish: "Presentación del Señor",
        latin: "In Præsentatione Domini",
        rank: Rank::Feast,
        color: "WHITE",
        obligation: false,
    },
    FixedCelebration {
        month: 3,
        day: 19,
        id: "joseph_spouse_of_mary",
        spanish: "San José, esposo de la Virgen María",
        latin: "S. Ioseph, Sponsi B. M. V.",
        rank: Rank::Solemnity,
        color: "WHITE",
        obligation: true,
    },
    FixedCelebration {
        month: 7,
        day: 25,
        id: "james_apostle",
        spanish: "Santiago, apóstol",
        latin: "S. Iacobi, apostoli",
        rank: Rank::Solemnity,
        color: "RED",
        obligation: true,
    },
    FixedCelebration {
        month: 8,
        day: 15,
        id: "assumption_of_the_blessed_virgin_mary",
        spanish: "Asunción de la Virgen María",
        latin: "In Assumptione B. M. V.",
        rank: Rank::Solemnity,
        color: "WHITE",
        obligation: true,
    },
    FixedCelebration {
        month: 11,
        day: 1,
        id: "all_saints",
        spanish: "Todos los Santos",
        latin: "Omnium Sanctorum",
        rank: Rank::Solemnity,
        color: "WHITE",
        obligation: true,
    },
    FixedCelebration {
        month: 11,
        day: 2,
        id: "commemoration_of_all_the_faithful_departed",
        spanish: "Conmemoración de todos los fieles difuntos",
        latin: "In Commemoratione Omnium Fidelium Defunctorum",
        rank: Rank::Feast,
        color: "BLACK",
        obligation: false,
    },
    FixedCelebration {
        month: 12,
        day: 8,
        id: "immaculate_conception_of_the_blessed_virgin_mary",
        spanish: "Inmaculada Concepción de la Virgen María",
        latin: "In Conceptione Immaculata B. M. V.",
        rank: Rank::Solemnity,
        color: "WHITE",
        obligation: true,
    },
    FixedCelebration {
        month: 12,
        day: 25,
        id: "nativity_of_the_lord",
        spanish: "Natividad del Señor",
        latin: "In Nativitate Domini",
        rank: Rank::Solemnity,
        color: "WHITE",
        obligation: true,
    },
];
