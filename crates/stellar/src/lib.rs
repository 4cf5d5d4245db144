//! Host star model and circumstellar habitable zone calculation.

pub mod error;
pub mod habitable_zone;
pub mod spectral;
pub mod star;

#[cfg(test)]
mod spectral_test;
#[cfg(test)]
mod star_test;

pub use error::StellarError;
pub use habitable_zone::{HabitableZone, ZoneFactors};
pub use spectral::SpectralType;
pub use star::{Star, StarParameters, solar_analog};
