//! Static lookup data: color palettes, season banners and UI strings.
//!
//! Everything here is immutable and keyed by enums, so a lookup can only
//! miss at the parsing step (tag to enum), never here.

use serde::{Deserialize, Serialize};

use super::color::ColorKey;
use super::locale::Language;
use super::season::SeasonKey;

/// Display tokens for one liturgical color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPalette {
    pub bg: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub hover_bg: &'static str,
    pub icon: &'static str,
    pub badge: &'static str,
}

const VIOLET: ColorPalette = ColorPalette {
    bg: "bg-purple-50",
    text: "text-purple-900",
    border: "border-purple-200",
    hover_bg: "group-hover:bg-purple-50/50",
    icon: "bg-purple-500",
    badge: "bg-purple-100 text-purple-700 ring-purple-600/20",
};

const WHITE: ColorPalette = ColorPalette {
    bg: "bg-white",
    text: "text-slate-800",
    border: "border-slate-200",
    hover_bg: "group-hover:bg-slate-50",
    icon: "bg-yellow-400",
    badge: "bg-slate-100 text-slate-700 ring-slate-600/20",
};

const GREEN: ColorPalette = ColorPalette {
    bg: "bg-emerald-50",
    text: "text-emerald-900",
    border: "border-emerald-200",
    hover_bg: "group-hover:bg-emerald-50/50",
    icon: "bg-emerald-500",
    badge: "bg-emerald-100 text-emerald-700 ring-emerald-600/20",
};

const RED: ColorPalette = ColorPalette {
    bg: "bg-rose-50",
    text: "text-rose-900",
    border: "border-rose-200",
    hover_bg: "group-hover:bg-rose-50/50",
    icon: "bg-rose-500",
    badge: "bg-rose-100 text-rose-700 ring-rose-600/20",
};

const PINK: ColorPalette = ColorPalette {
    bg: "bg-pink-50",
    text: "text-pink-900",
    border: "border-pink-200",
    hover_bg: "group-hover:bg-pink-50/50",
    icon: "bg-pink-500",
    badge: "bg-pink-100 text-pink-700 ring-pink-600/20",
};

const BLUE: ColorPalette = ColorPalette {
    bg: "bg-sky-50",
    text: "text-sky-900",
    border: "border-sky-200",
    hover_bg: "group-hover:bg-sky-50/50",
    icon: "bg-sky-500",
    badge: "bg-sky-100 text-sky-700 ring-sky-600/20",
};

const BLACK: ColorPalette = ColorPalette {
    bg: "bg-slate-50",
    text: "text-slate-900",
    border: "border-slate-300",
    hover_bg: "group-hover:bg-slate-100",
    icon: "bg-slate-700",
    badge: "bg-slate-200 text-slate-800 ring-slate-700/20",
};

/// Returns the palette of a color.
pub(crate) fn color_palette(color: ColorKey) -> &'static ColorPalette {
    match color {
        ColorKey::Violet => &VIOLET,
        ColorKey::White => &WHITE,
        ColorKey::Green => &GREEN,
        ColorKey::Red => &RED,
        ColorKey::Pink => &PINK,
        ColorKey::Blue => &BLUE,
        ColorKey::Black => &BLACK,
    }
}

/// Banner texts of a season block, in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonInfo {
    title: &'static str,
    latin_title: &'static str,
    description: &'static str,
    latin_description: &'static str,
}

impl SeasonInfo {
    pub fn title(&self, language: Language) -> &'static str {
        match language {
            Language::Spanish => self.title,
            Language::Latin => self.latin_title,
        }
    }

    pub fn description(&self, language: Language) -> &'static str {
        match language {
            Language::Spanish => self.description,
            Language::Latin => self.latin_description,
        }
    }
}

pub(crate) fn season_info(key: SeasonKey) -> &'static SeasonInfo {
    match key {
        SeasonKey::Advent => &SeasonInfo {
            title: "Advent Season",
            latin_title: "Tempus Adventus",
            description: "Preparation for the coming of Christ.",
            latin_description: "Præparatio adventus Christi.",
        },
        SeasonKey::Christmas => &SeasonInfo {
            title: "Christmas Season",
            latin_title: "Tempus Nativitatis",
            description: "Celebration of the Birth of the Lord.",
            latin_description: "Nativitas Domini.",
        },
        SeasonKey::OrdinaryTime1 => &SeasonInfo {
            title: "Ordinary Time I",
            latin_title: "Tempus per Annum I",
            description: "Public life of Jesus.",
            latin_description: "Initium ministerii publici Iesu.",
        },
        SeasonKey::Lent => &SeasonInfo {
            title: "Lent Season",
            latin_title: "Tempus Quadragesimæ",
            description: "Penance and preparation for Easter.",
            latin_description: "Pænitentia et præparatio ad Pascha.",
        },
        SeasonKey::HolyWeek => &SeasonInfo {
            title: "Holy Week",
            latin_title: "Hebdomada Sancta",
            description: "Passion of the Lord.",
            latin_description: "Passio Domini.",
        },
        SeasonKey::Easter => &SeasonInfo {
            title: "Easter Season",
            latin_title: "Tempus Paschale",
            description: "Celebration of the Risen Christ.",
            latin_description: "Christus resurrexit.",
        },
        SeasonKey::OrdinaryTime2 => &SeasonInfo {
            title: "Ordinary Time II",
            latin_title: "Tempus per Annum II",
            description: "Teachings, miracles, and growth of the Kingdom.",
            latin_description: "Doctrina et miracula Domini.",
        },
    }
}

/// One selectable season block with its localized texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonEntry {
    pub key: SeasonKey,
    pub title: String,
    pub description: String,
}

/// Lists every season block that owns a banner, in liturgical order.
pub fn season_catalog(language: Language) -> Vec<SeasonEntry> {
    SeasonKey::ALL
        .iter()
        .map(|key| {
            let info = season_info(*key);
            SeasonEntry {
                key: *key,
                title: info.title(language).to_string(),
                description: info.description(language).to_string(),
            }
        })
        .collect()
}

/// Fixed interface strings of one language.
#[derive(Debug)]
pub(crate) struct UiStrings {
    pub title: &'static str,
    pub country: &'static str,
    pub today_label: &'static str,
    pub obligation_label: &'static str,
    pub cycle_word: &'static str,
    pub year_word: &'static str,
    pub even_year: &'static str,
    pub odd_year: &'static str,
    pub week_word: &'static str,
    pub week_connective: &'static str,
}

const SPANISH_STRINGS: UiStrings = UiStrings {
    title: "CALENDARIO LITÚRGICO",
    country: "España",
    today_label: "HOY",
    obligation_label: "PRECEPTO",
    cycle_word: "Ciclo",
    year_word: "Año",
    even_year: "Par (II)",
    odd_year: "Impar (I)",
    week_word: "Semana",
    week_connective: "de",
};

const LATIN_STRINGS: UiStrings = UiStrings {
    title: "CALENDARIUM LITURGICUM",
    country: "Hispania",
    today_label: "HODIE",
    obligation_label: "DE PRÆCEPTO",
    cycle_word: "Cyclus",
    year_word: "Annus",
    even_year: "Par (II)",
    odd_year: "Impar (I)",
    week_word: "Hebdomada",
    week_connective: "de",
};

pub(crate) fn ui_strings(language: Language) -> &'static UiStrings {
    match language {
        Language::Spanish => &SPANISH_STRINGS,
        Language::Latin => &LATIN_STRINGS,
    }
}

/// Latin weekday abbreviations keyed by the English abbreviated weekday.
const LATIN_WEEKDAYS: [(&str, &str); 7] = [
    ("sun", "Dom."),
    ("mon", "Fer. II"),
    ("tue", "Fer. III"),
    ("wed", "Fer. IV"),
    ("thu", "Fer. V"),
    ("fri", "Fer. VI"),
    ("sat", "Sabb."),
];

/// Latin month abbreviations keyed by the English abbreviated month.
const LATIN_MONTHS: [(&str, &str); 12] = [
    ("jan", "Ian."),
    ("feb", "Feb."),
    ("mar", "Mar."),
    ("apr", "Apr."),
    ("may", "Mai."),
    ("jun", "Iun."),
    ("jul", "Iul."),
    ("aug", "Aug."),
    ("sep", "Sept."),
    ("oct", "Oct."),
    ("nov", "Nov."),
    ("dec", "Dec."),
];

pub(crate) fn latin_weekday(key: &str) -> Option<&'static str> {
    lookup(&LATIN_WEEKDAYS, key)
}

pub(crate) fn latin_month(key: &str) -> Option<&'static str> {
    lookup(&LATIN_MONTHS, key)
}

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, value)| *value)
}

/// Full Latin weekday names, Sunday first.
pub(crate) const LATIN_LONG_WEEKDAYS: [&str; 7] = [
    "Die Dominica",
    "Die Lunae",
    "Die Martis",
    "Die Mercurii",
    "Die Iovis",
    "Die Veneris",
    "Die Saturni",
];

/// Latin month names in the genitive, January first.
pub(crate) const LATIN_LONG_MONTHS: [&str; 12] = [
    "Ianuarii",
    "Februarii",
    "Martii",
    "Aprilis",
    "Maii",
    "Iunii",
    "Iulii",
    "Augusti",
    "Septembris",
    "Octobris",
    "Novembris",
    "Decembris",
];

/// Latin names of the hours, indexed by the hour of the civil day.
///
/// Night hours count the five watches from nightfall, daylight hours count
/// from sunrise. Noon and the hour before it are both the sixth hour.
pub(crate) const LATIN_HOURS: [&str; 24] = [
    "media nox",
    "prima vigilia",
    "secunda vigilia",
    "tertia vigilia",
    "quarta vigilia",
    "quinta vigilia",
    "hora prima",
    "hora secunda",
    "hora tertia",
    "hora quarta",
    "hora quinta",
    "hora sexta",
    "hora sexta",
    "hora septima",
    "hora octava",
    "hora nona",
    "hora decima",
    "hora undecima",
    "hora duodecima",
    "prima vigilia",
    "secunda vigilia",
    "tertia vigilia",
    "quarta vigilia",
    "quinta vigilia",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_hours_cover_the_day() {
        assert_eq!(LATIN_HOURS[0], "media nox");
        assert_eq!(LATIN_HOURS[6], "hora prima");
        assert_eq!(LATIN_HOURS[11], LATIN_HOURS[12]);
        assert_eq!(LATIN_HOURS[18], "hora duodecima");
        assert_eq!(LATIN_HOURS[19], LATIN_HOURS[1]);
        assert_eq!(LATIN_HOURS[23], "quinta vigilia");
    }

    #[test]
    fn test_every_color_has_a_palette() {
        for color in ColorKey::ALL {
            let palette = color_palette(color);
            assert!(!palette.bg.is_empty());
            assert!(!palette.badge.is_empty());
        }
    }

    #[test]
    fn test_season_catalog_order_and_language() {
        let catalog = season_catalog(Language::Latin);
        let keys: Vec<_> = catalog.iter().map(|entry| entry.key).collect();

        assert_eq!(keys, SeasonKey::ALL.to_vec());
        assert_eq!(catalog[0].title, "Tempus Adventus");
        assert_eq!(catalog[6].title, "Tempus per Annum II");
    }

    #[test]
    fn test_season_catalog_primary_language() {
        let catalog = season_catalog(Language::Spanish);
        assert_eq!(catalog[4].title, "Holy Week");
        assert_eq!(catalog[4].description, "Passion of the Lord.");
    }

    #[test]
    fn test_latin_tables_cover_every_key() {
        for key in ["sun", "mon", "tue", "wed", "thu", "fri", "sat"] {
            assert!(latin_weekday(key).is_some(), "{key}");
        }
        for key in [
            "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
        ] {
            assert!(latin_month(key).is_some(), "{key}");
        }
        assert_eq!(latin_weekday("xyz"), None);
    }

    #[test]
    fn test_obligation_labels() {
        assert_eq!(ui_strings(Language::Spanish).obligation_label, "PRECEPTO");
        assert_eq!(ui_strings(Language::Latin).obligation_label, "DE PRÆCEPTO");
    }
}
