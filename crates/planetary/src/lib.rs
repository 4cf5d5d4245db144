//! Planet model and potential habitability classification
//!
//! Planets are immutable records validated at construction. Classification is
//! a strict conjunction of independent criteria evaluated against habitable
//! zone edges supplied by the caller.

pub mod atmosphere;
pub mod error;
pub mod habitability;
pub mod planet;

// Re-export key types at crate root
pub use atmosphere::Atmosphere;
pub use error::PlanetError;
pub use habitability::{
    HabitabilityAssessment, HabitabilityCheck, effective_distance, is_potentially_habitable,
};
pub use planet::{
    Planet, PlanetParameters, earth_analog, kepler_442b_analog, mars_analog, venus_analog,
};
