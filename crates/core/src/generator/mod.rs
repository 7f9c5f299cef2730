//! The seam between the core and the external liturgical-computation library.
//!
//! The core never computes liturgical rules itself. It asks an
//! [`EventGenerator`] for the raw events of a civil year and resolves them.

mod error;
mod traits;

pub use error::{GeneratorError, GeneratorResult};
pub use traits::{CivilYearEvents, EventGenerator};
