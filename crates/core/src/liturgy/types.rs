use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::color::ColorKey;
use super::cycle::Cycle;
use super::locale::Language;
use super::season::{OrdinaryBlock, Season, SeasonKey};
use super::window::LiturgicalWindow;

/// The liturgical importance class of an observance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rank {
    Solemnity,
    Sunday,
    Feast,
    Memorial,
    Feria,
    Weekday,
    /// Any rank the generator emits that has no precedence of its own.
    Other(String),
}

impl Rank {
    /// Parses a generator rank tag. Unknown tags are kept verbatim.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "SOLEMNITY" => Rank::Solemnity,
            "SUNDAY" => Rank::Sunday,
            "FEAST" => Rank::Feast,
            "MEMORIAL" => Rank::Memorial,
            "FERIA" => Rank::Feria,
            "WEEKDAY" => Rank::Weekday,
            _ => Rank::Other(tag.to_string()),
        }
    }

    /// Returns the generator tag for this rank.
    pub fn as_str(&self) -> &str {
        match self {
            Rank::Solemnity => "SOLEMNITY",
            Rank::Sunday => "SUNDAY",
            Rank::Feast => "FEAST",
            Rank::Memorial => "MEMORIAL",
            Rank::Feria => "FERIA",
            Rank::Weekday => "WEEKDAY",
            Rank::Other(tag) => tag,
        }
    }

    /// Numeric precedence used to pick the principal event of a day.
    /// Sundays weigh the same as solemnities; unknown ranks weigh nothing.
    pub fn precedence(&self) -> u8 {
        match self {
            Rank::Solemnity | Rank::Sunday => 4,
            Rank::Feast => 3,
            Rank::Memorial => 2,
            Rank::Feria | Rank::Weekday => 1,
            Rank::Other(_) => 0,
        }
    }

    /// Returns true for plain weekdays, which carry no rank badge.
    pub fn is_ferial(&self) -> bool {
        matches!(self, Rank::Feria | Rank::Weekday)
    }
}

impl From<String> for Rank {
    fn from(tag: String) -> Self {
        Rank::from_tag(&tag)
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> Self {
        rank.as_str().to_string()
    }
}

/// A single observance as produced by the external generator.
///
/// Only the fields the resolver needs are kept; anything else in the
/// generator output is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "crate::serde::RawEventRecord")]
pub struct RawEvent {
    pub date: NaiveDate,
    pub rank: Rank,
    /// Localized display label for the rank.
    pub rank_name: Option<String>,
    pub name: String,
    /// Season tags; the first one is the primary season.
    pub seasons: Vec<String>,
    /// Special period tags such as `HOLY_WEEK` or `EASTER_OCTAVE`.
    pub periods: Vec<String>,
    /// Liturgical color tags, most significant first.
    pub colors: Vec<String>,
    pub is_holy_day_of_obligation: bool,
    /// Stable identifier, used for the named color overrides.
    pub id: String,
    pub week_of_season: Option<u32>,
    /// Localized season names, parallel to `seasons`.
    pub season_names: Vec<String>,
}

impl RawEvent {
    /// Creates an event with no season, period or color tags.
    pub fn new(
        date: NaiveDate,
        id: impl Into<String>,
        name: impl Into<String>,
        rank: Rank,
    ) -> Self {
        Self {
            date,
            rank,
            rank_name: None,
            name: name.into(),
            seasons: Vec::new(),
            periods: Vec::new(),
            colors: Vec::new(),
            is_holy_day_of_obligation: false,
            id: id.into(),
            week_of_season: None,
            season_names: Vec::new(),
        }
    }

    /// Sets the localized rank label.
    pub fn with_rank_name(mut self, rank_name: impl Into<String>) -> Self {
        self.rank_name = Some(rank_name.into());
        self
    }

    /// Appends a season tag.
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.seasons.push(season.into());
        self
    }

    /// Appends a period tag.
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.periods.push(period.into());
        self
    }

    /// Appends a color tag.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.colors.push(color.into());
        self
    }

    /// Marks the event as a holy day of obligation.
    pub fn with_obligation(mut self) -> Self {
        self.is_holy_day_of_obligation = true;
        self
    }

    /// Sets the week of the season and its localized season name.
    pub fn with_week(mut self, week: u32, season_name: impl Into<String>) -> Self {
        self.week_of_season = Some(week);
        self.season_names.push(season_name.into());
        self
    }

    /// Returns true if the event carries the given period tag, ignoring case
    /// and surrounding whitespace.
    pub fn has_period(&self, period: &str) -> bool {
        let period = period.trim();
        self.periods
            .iter()
            .any(|tag| tag.trim().eq_ignore_ascii_case(period))
    }

    /// Returns the rank label to display, falling back to the raw rank tag.
    pub fn rank_label(&self) -> &str {
        self.rank_name.as_deref().unwrap_or_else(|| self.rank.as_str())
    }
}

/// A badge shown next to a day's principal event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Badge {
    /// The rank of the observance, styled with the day's color.
    Rank { label: String, color: ColorKey },
    /// Holy day of obligation marker.
    Obligation { label: String },
}

impl Badge {
    /// Returns the badge text.
    pub fn label(&self) -> &str {
        match self {
            Badge::Rank { label, .. } | Badge::Obligation { label } => label,
        }
    }
}

/// Localized pieces of a day's date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    pub day_name: String,
    pub month_name: String,
    /// "Semana 3 de Adviento" style text, empty when the event has no week.
    pub week_text: String,
    pub day_number: u32,
}

/// A fully resolved day, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDay {
    pub date: NaiveDate,
    pub principal: RawEvent,
    pub color: ColorKey,
    pub badges: Vec<Badge>,
    pub date_parts: DateParts,
    /// True on the first day of a new season block.
    pub banner_start: bool,
    /// The season banner to show, set only when `banner_start` is true.
    pub season_key: Option<SeasonKey>,
    pub season: Season,
    pub ordinary_block: OrdinaryBlock,
}

impl ResolvedDay {
    /// Returns the `YYYY-MM-DD` key of this day.
    pub fn date_key(&self) -> String {
        super::aggregate::date_key(self.date)
    }
}

/// Localized heading texts for a liturgical year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearHeader {
    pub title: String,
    /// "España • 2024 / 2025".
    pub country_line: String,
    /// "Ciclo C • Año Impar (I)".
    pub cycle_line: String,
    pub today_label: String,
}

/// The resolved liturgical year handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiturgicalYear {
    pub end_year: i32,
    pub language: Language,
    pub window: LiturgicalWindow,
    pub cycle: Cycle,
    pub header: YearHeader,
    /// One entry per day of the window, in ascending date order.
    pub days: Vec<ResolvedDay>,
}

impl LiturgicalYear {
    /// Returns the resolved day for `date`, if it belongs to this year.
    pub fn day(&self, date: NaiveDate) -> Option<&ResolvedDay> {
        self.days
            .binary_search_by(|day| day.date.cmp(&date))
            .ok()
            .map(|idx| &self.days[idx])
    }

    /// Returns the days on which a season banner starts.
    pub fn banners(&self) -> impl Iterator<Item = &ResolvedDay> {
        self.days.iter().filter(|day| day.banner_start)
    }
}
