//! Season classification and banner segmentation.
//!
//! A liturgical year is walked day by day with a [`SeasonState`] carried
//! along. Each step yields a [`SeasonMark`] telling whether a new season
//! banner starts on that day.

use serde::{Deserialize, Serialize};

use super::locale::Language;
use super::tables::{season_info, SeasonInfo};
use super::types::RawEvent;

/// Period tag that forces a day into Holy Week.
pub const HOLY_WEEK_PERIOD: &str = "HOLY_WEEK";
/// Period tag that forces a day into the Easter season.
pub const EASTER_OCTAVE_PERIOD: &str = "EASTER_OCTAVE";

/// A liturgical season as classified from generator tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Season {
    Advent,
    Christmas,
    Lent,
    HolyWeek,
    Triduum,
    Easter,
    OrdinaryTime,
    Unrecognized(String),
}

impl Season {
    /// Parses a generator season tag, folding known alternative spellings.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "ADVENT" => Season::Advent,
            "CHRISTMAS" | "CHRISTMASTIDE" | "CHRISTMAS_TIME" => Season::Christmas,
            "LENT" => Season::Lent,
            "HOLY_WEEK" => Season::HolyWeek,
            "TRIDUUM" | "PASCHAL_TRIDUUM" => Season::Triduum,
            "EASTER" | "EASTER_TIME" => Season::Easter,
            "ORDINARY_TIME" => Season::OrdinaryTime,
            _ => Season::Unrecognized(tag.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Season::Advent => "ADVENT",
            Season::Christmas => "CHRISTMAS",
            Season::Lent => "LENT",
            Season::HolyWeek => "HOLY_WEEK",
            Season::Triduum => "TRIDUUM",
            Season::Easter => "EASTER",
            Season::OrdinaryTime => "ORDINARY_TIME",
            Season::Unrecognized(tag) => tag,
        }
    }
}

impl From<String> for Season {
    fn from(tag: String) -> Self {
        Season::from_tag(&tag)
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        season.as_str().to_string()
    }
}

/// Which of the two Ordinary Time stretches a day belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrdinaryBlock {
    /// Between Christmas and Lent.
    #[default]
    First,
    /// After Easter.
    Second,
}

/// Key of a season banner. Ordinary Time owns two keys, one per block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonKey {
    #[serde(rename = "ADVENT")]
    Advent,
    #[serde(rename = "CHRISTMAS")]
    Christmas,
    #[serde(rename = "ORDINARY_TIME_1")]
    OrdinaryTime1,
    #[serde(rename = "LENT")]
    Lent,
    #[serde(rename = "HOLY_WEEK")]
    HolyWeek,
    #[serde(rename = "EASTER")]
    Easter,
    #[serde(rename = "ORDINARY_TIME_2")]
    OrdinaryTime2,
}

impl SeasonKey {
    /// Every banner key in liturgical order.
    pub const ALL: [SeasonKey; 7] = [
        SeasonKey::Advent,
        SeasonKey::Christmas,
        SeasonKey::OrdinaryTime1,
        SeasonKey::Lent,
        SeasonKey::HolyWeek,
        SeasonKey::Easter,
        SeasonKey::OrdinaryTime2,
    ];

    /// Returns the banner key of a season, if the season owns one.
    pub fn for_season(season: &Season, block: OrdinaryBlock) -> Option<Self> {
        match season {
            Season::Advent => Some(SeasonKey::Advent),
            Season::Christmas => Some(SeasonKey::Christmas),
            Season::Lent => Some(SeasonKey::Lent),
            Season::HolyWeek => Some(SeasonKey::HolyWeek),
            Season::Easter => Some(SeasonKey::Easter),
            Season::OrdinaryTime => match block {
                OrdinaryBlock::First => Some(SeasonKey::OrdinaryTime1),
                OrdinaryBlock::Second => Some(SeasonKey::OrdinaryTime2),
            },
            Season::Triduum | Season::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonKey::Advent => "ADVENT",
            SeasonKey::Christmas => "CHRISTMAS",
            SeasonKey::OrdinaryTime1 => "ORDINARY_TIME_1",
            SeasonKey::Lent => "LENT",
            SeasonKey::HolyWeek => "HOLY_WEEK",
            SeasonKey::Easter => "EASTER",
            SeasonKey::OrdinaryTime2 => "ORDINARY_TIME_2",
        }
    }

    pub fn info(&self) -> &'static SeasonInfo {
        season_info(*self)
    }

    pub fn title(&self, language: Language) -> &'static str {
        self.info().title(language)
    }
}

impl std::fmt::Display for SeasonKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies the season of a principal event.
///
/// The first season tag is the base (Ordinary Time when absent). A Holy Week
/// period overrides it, and an Easter Octave period overrides both.
pub fn classify_season(event: &RawEvent) -> Season {
    let mut season = event
        .seasons
        .first()
        .map(|tag| Season::from_tag(tag))
        .unwrap_or(Season::OrdinaryTime);

    if event.has_period(HOLY_WEEK_PERIOD) {
        season = Season::HolyWeek;
    }
    if event.has_period(EASTER_OCTAVE_PERIOD) {
        season = Season::Easter;
    }

    season
}

/// Season tracking carried across one pass over a liturgical year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonState {
    current: Option<Season>,
    block: OrdinaryBlock,
}

/// Outcome of one day of segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonMark {
    pub season: Season,
    pub block: OrdinaryBlock,
    /// Set on the first day of a season that owns a banner.
    pub banner: Option<SeasonKey>,
}

impl SeasonState {
    pub fn current(&self) -> Option<&Season> {
        self.current.as_ref()
    }

    pub fn block(&self) -> OrdinaryBlock {
        self.block
    }

    /// Feeds the next day's principal event into the state.
    ///
    /// Ordinary Time that follows Easter moves to the second block, and the
    /// block never moves back. A season change emits a banner only when the
    /// season owns one; the state changes either way.
    pub fn advance(self, event: &RawEvent) -> (SeasonState, SeasonMark) {
        let season = classify_season(event);

        let block = if season == Season::OrdinaryTime && self.current == Some(Season::Easter) {
            OrdinaryBlock::Second
        } else {
            self.block
        };

        if self.current.as_ref() == Some(&season) && self.block == block {
            let mark = SeasonMark {
                season,
                block,
                banner: None,
            };
            return (self, mark);
        }

        let banner = SeasonKey::for_season(&season, block);
        match banner {
            Some(key) => tracing::trace!(date = %event.date, season_key = %key, "Season banner"),
            None => tracing::trace!(
                date = %event.date,
                season = %season.as_str(),
                "Season without banner"
            ),
        }

        let next = SeasonState {
            current: Some(season.clone()),
            block,
        };
        let mark = SeasonMark {
            season,
            block,
            banner,
        };
        (next, mark)
    }
}

/// Runs the season state machine over the principal events of a year,
/// given in ascending date order. Returns one mark per event.
pub fn segment_seasons<'a, I>(events: I) -> Vec<SeasonMark>
where
    I: IntoIterator<Item = &'a RawEvent>,
{
    events
        .into_iter()
        .scan(SeasonState::default(), |state, event| {
            let (next, mark) = std::mem::take(state).advance(event);
            *state = next;
            Some(mark)
        })
        .collect()
}
