//! Liturgical color resolution and badge construction.

use serde::{Deserialize, Serialize};

use super::locale::Language;
use super::tables::{color_palette, ui_strings, ColorPalette};
use super::types::{Badge, RawEvent};

const IMMACULATE_CONCEPTION: &str = "immaculate_conception_of_the_blessed_virgin_mary";
const GAUDETE_SUNDAY: &str = "advent_3_sunday";
const LAETARE_SUNDAY: &str = "lent_4_sunday";

/// Display color of a liturgical day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColorKey {
    Violet,
    White,
    Green,
    Red,
    Pink,
    Blue,
    Black,
}

impl ColorKey {
    pub const ALL: [ColorKey; 7] = [
        ColorKey::Violet,
        ColorKey::White,
        ColorKey::Green,
        ColorKey::Red,
        ColorKey::Pink,
        ColorKey::Blue,
        ColorKey::Black,
    ];

    /// Parses a generator color tag, case-insensitively.
    ///
    /// `PURPLE` is accepted as a spelling of violet.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "VIOLET" | "PURPLE" => Some(ColorKey::Violet),
            "WHITE" => Some(ColorKey::White),
            "GREEN" => Some(ColorKey::Green),
            "RED" => Some(ColorKey::Red),
            "PINK" => Some(ColorKey::Pink),
            "BLUE" => Some(ColorKey::Blue),
            "BLACK" => Some(ColorKey::Black),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorKey::Violet => "VIOLET",
            ColorKey::White => "WHITE",
            ColorKey::Green => "GREEN",
            ColorKey::Red => "RED",
            ColorKey::Pink => "PINK",
            ColorKey::Blue => "BLUE",
            ColorKey::Black => "BLACK",
        }
    }

    pub fn palette(&self) -> &'static ColorPalette {
        color_palette(*self)
    }
}

impl std::fmt::Display for ColorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the palette for a raw color tag, or the white palette when the
/// tag is unknown.
pub fn palette_for_tag(tag: &str) -> &'static ColorPalette {
    ColorKey::from_tag(tag).unwrap_or(ColorKey::White).palette()
}

/// Resolves the display color of an event.
///
/// The first color tag wins. Missing or unknown tags fall back to white.
/// Named observances then override the tag: the Immaculate Conception is
/// blue, Gaudete and Laetare Sundays are pink.
pub fn resolve_color(event: &RawEvent) -> ColorKey {
    let base = match event.colors.first() {
        Some(tag) => ColorKey::from_tag(tag).unwrap_or_else(|| {
            tracing::debug!(date = %event.date, tag = %tag, "Unknown color tag, using WHITE");
            ColorKey::White
        }),
        None => ColorKey::White,
    };

    match event.id.as_str() {
        IMMACULATE_CONCEPTION => ColorKey::Blue,
        GAUDETE_SUNDAY | LAETARE_SUNDAY => ColorKey::Pink,
        _ => base,
    }
}

/// Builds the badges of a principal event.
///
/// Plain weekdays get no rank badge. The obligation badge, when present,
/// always comes after the rank badge.
pub fn resolve_badges(event: &RawEvent, color: ColorKey, language: Language) -> Vec<Badge> {
    let mut badges = Vec::with_capacity(2);

    if !event.rank.is_ferial() {
        badges.push(Badge::Rank {
            label: event.rank_label().to_string(),
            color,
        });
    }

    if event.is_holy_day_of_obligation {
        badges.push(Badge::Obligation {
            label: ui_strings(language).obligation_label.to_string(),
        });
    }

    badges
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::liturgy::types::Rank;

    fn make_event(id: &str, rank: Rank) -> RawEvent {
        let date = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        RawEvent::new(date, id, "Test", rank)
    }

    #[test]
    fn test_first_color_tag_wins() {
        let event = make_event("x", Rank::Feast)
            .with_color("red")
            .with_color("WHITE");
        assert_eq!(resolve_color(&event), ColorKey::Red);
    }

    #[test]
    fn test_purple_is_violet() {
        let event = make_event("lent_1_sunday", Rank::Sunday).with_color("PURPLE");
        assert_eq!(resolve_color(&event), ColorKey::Violet);
    }

    #[test]
    fn test_gaudete_overrides_violet() {
        let event = make_event("advent_3_sunday", Rank::Sunday).with_color("VIOLET");
        assert_eq!(resolve_color(&event), ColorKey::Pink);

        let event = make_event("lent_4_sunday", Rank::Sunday).with_color("PURPLE");
        assert_eq!(resolve_color(&event), ColorKey::Pink);
    }

    #[test]
    fn test_immaculate_conception_is_blue() {
        let event = make_event(IMMACULATE_CONCEPTION, Rank::Solemnity).with_color("WHITE");
        assert_eq!(resolve_color(&event), ColorKey::Blue);
    }

    #[test]
    fn test_unknown_or_missing_color_falls_back_to_white() {
        let event = make_event("x", Rank::Memorial).with_color("GOLD");
        assert_eq!(resolve_color(&event), ColorKey::White);

        let event = make_event("x", Rank::Memorial);
        assert_eq!(resolve_color(&event), ColorKey::White);

        assert_eq!(palette_for_tag("GOLD"), ColorKey::White.palette());
        assert_eq!(palette_for_tag("purple"), ColorKey::Violet.palette());
    }

    #[test]
    fn test_rose_is_not_an_alias() {
        let event = make_event("some_memorial", Rank::Memorial).with_color("ROSE");
        assert_eq!(resolve_color(&event), ColorKey::White);
        assert_eq!(ColorKey::from_tag("rose"), None);
        assert_eq!(palette_for_tag("ROSE"), ColorKey::White.palette());

        let event = make_event("some_memorial", Rank::Memorial).with_color("pink");
        assert_eq!(resolve_color(&event), ColorKey::Pink);
    }

    #[test]
    fn test_ferial_day_has_no_badges() {
        for rank in [Rank::Feria, Rank::Weekday] {
            let event = make_event("weekday", rank);
            assert!(resolve_badges(&event, ColorKey::Green, Language::Spanish).is_empty());
        }
    }

    #[test]
    fn test_ferial_obligation_keeps_only_obligation_badge() {
        let event = make_event("weekday", Rank::Feria).with_obligation();
        let badges = resolve_badges(&event, ColorKey::Green, Language::Latin);

        assert_eq!(
            badges,
            vec![Badge::Obligation {
                label: "DE PRÆCEPTO".to_string()
            }]
        );
    }

    #[test]
    fn test_rank_badge_precedes_obligation_badge() {
        let event = make_event(IMMACULATE_CONCEPTION, Rank::Solemnity)
            .with_rank_name("Solemnidad")
            .with_obligation();
        let badges = resolve_badges(&event, ColorKey::Blue, Language::Spanish);

        assert_eq!(
            badges,
            vec![
                Badge::Rank {
                    label: "Solemnidad".to_string(),
                    color: ColorKey::Blue,
                },
                Badge::Obligation {
                    label: "PRECEPTO".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_rank_badge_falls_back_to_raw_rank() {
        let event = make_event("x", Rank::Other("TRIDUUM".to_string()));
        let badges = resolve_badges(&event, ColorKey::Red, Language::Spanish);
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].label(), "TRIDUUM");
    }

    #[test]
    fn test_color_key_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&ColorKey::Violet).unwrap(), "\"VIOLET\"");
        for color in ColorKey::ALL {
            assert_eq!(ColorKey::from_tag(color.as_str()), Some(color));
        }
    }
}
