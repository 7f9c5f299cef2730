//! ordo_core - functional core for resolving a liturgical year.
//!
//! Everything here is pure except the [`generator::EventGenerator`] seam,
//! which the shell crate implements on top of real data sources.

pub mod generator;
pub mod liturgy;
pub mod serde;
