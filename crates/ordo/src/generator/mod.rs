//! Event generator backends.
//!
//! The core only knows the [`EventGenerator`] trait. This module provides the
//! backends the binary can pick from:
//!
//! - [`JsonDirGenerator`] reads exports of the external library from disk
//! - [`InMemoryGenerator`] serves preloaded years
//! - [`SampleGenerator`] synthesizes demo years
//!
//! and [`TimeoutGenerator`], a decorator bounding each call in time.

mod inmemory;
mod json_dir;
mod sample;
mod timeout;

use std::sync::Arc;

use ordo_core::generator::EventGenerator;

pub use inmemory::InMemoryGenerator;
pub use json_dir::JsonDirGenerator;
pub use sample::SampleGenerator;
pub use timeout::TimeoutGenerator;

use crate::config::Config;

/// Builds the generator selected by the configuration, bounded by the
/// configured timeout.
pub fn build_generator(config: &Config, sample: bool) -> Arc<dyn EventGenerator> {
    let inner: Arc<dyn EventGenerator> = if sample {
        tracing::debug!("Using sample generator");
        Arc::new(SampleGenerator)
    } else {
        let generator = JsonDirGenerator::new(config.data_dir.clone());
        tracing::debug!(data_dir = %generator.root().display(), "Using JSON export generator");
        Arc::new(generator)
    };

    Arc::new(TimeoutGenerator::new(inner, config.generator_timeout()))
}
