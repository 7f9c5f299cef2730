//! ordo - command line shell around `ordo_core`.
//!
//! Owns everything with side effects: reading generator exports from disk,
//! bounding generator calls in time, configuration and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;

pub use config::Config;
pub use error::{OrdoError, Result};
