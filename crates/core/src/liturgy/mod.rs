//! Resolution of a liturgical year from raw generator events.
//!
//! The pipeline runs leaves first: [`liturgical_window`] bounds the year,
//! [`aggregate_events`] fetches and buckets events, [`principal_event`] picks
//! one event per day, [`resolve_color`]/[`resolve_badges`] and [`date_parts`]
//! decorate it, and [`segment_seasons`] flags the days where a season banner
//! starts. [`resolve_buckets`] ties these together for one year.

mod aggregate;
mod color;
mod cycle;
mod error;
mod locale;
mod mock_data;
mod principal;
mod resolve;
mod season;
mod tables;
mod types;
mod window;

pub use aggregate::{aggregate_events, bucket_events, date_key, DayBuckets};
pub use color::{palette_for_tag, resolve_badges, resolve_color, ColorKey};
pub use cycle::{cycle_for, Cycle, SundayCycle, WeekdayCycle};
pub use error::{LiturgyError, LiturgyResult};
pub use locale::{date_parts, is_night, long_date_text, time_text, to_roman, Language};
pub use mock_data::{easter_sunday, generate_sample_year};
pub use principal::principal_event;
pub use resolve::{resolve_buckets, resolve_liturgical_year};
pub use season::{
    classify_season, segment_seasons, OrdinaryBlock, Season, SeasonKey, SeasonMark, SeasonState,
};
pub use tables::{season_catalog, ColorPalette, SeasonEntry, SeasonInfo};
pub use types::{Badge, DateParts, LiturgicalYear, RawEvent, Rank, ResolvedDay, YearHeader};
pub use window::{
    advent_start, liturgical_window, liturgical_year_of, LiturgicalWindow, MAX_END_YEAR,
    MIN_END_YEAR,
};
