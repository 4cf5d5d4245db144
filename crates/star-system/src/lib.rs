//! Single-star system assessment
//!
//! Ties a validated host star to its planets and runs the full pipeline:
//! habitable zone bounds, per-planet classification, and projection into a
//! [`Scene`] that any [`SceneRenderer`] can draw.

pub mod config;
pub mod error;
pub mod render;
pub mod scene;
pub mod system;

// Re-export main types at crate root
pub use config::SystemConfig;
pub use error::SystemError;
pub use render::SceneRenderer;
pub use scene::{
    Annulus, Circle, MarkerCategory, PlanetGeometry, PlanetMarker, Scene, StarMarker,
    ZoneGeometry,
};
pub use system::{Classification, StarSystem, SystemAssessment};

// Re-export domain types for convenience
pub use planetary::{Atmosphere, HabitabilityCheck, Planet, PlanetParameters};
pub use stellar::{HabitableZone, SpectralType, Star, StarParameters};

#[cfg(test)]
mod config_test;
