//! Static system configuration.
//!
//! Configuration is plain JSON with camelCase keys and values in the units
//! documented on [`StarParameters`] and [`PlanetParameters`]:
//!
//! ```json
//! {
//!   "star": {
//!     "luminosity": 1.0, "mass": 1.0, "temperature": 5778.0, "age": 4.6,
//!     "activity": 0.2, "galaxy": "Milky Way", "metallicity": 1.0,
//!     "magneticField": 1.0, "rotationPeriod": 25.0, "spectralClass": "G"
//!   },
//!   "planets": [
//!     {
//!       "name": "Earth", "orbitalDistance": 1.0, "radius": 1.0, "mass": 1.0,
//!       "atmosphere": { "N2": 0.78, "O2": 0.21 }, "gravity": 9.81,
//!       "eccentricity": 0.017, "magneticField": 1.0, "waterContent": 0.7,
//!       "surfaceTemp": 15.0, "rotationPeriod": 24.0, "axialTilt": 23.5,
//!       "geologicalActivity": 0.6
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use planetary::{PlanetParameters, earth_analog, kepler_442b_analog, mars_analog, venus_analog};
use stellar::StarParameters;

use crate::error::SystemError;
use crate::system::StarSystem;

/// Unvalidated star and planet parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    pub star: StarParameters,
    #[serde(default)]
    pub planets: Vec<PlanetParameters>,
}

impl SystemConfig {
    /// Sun-like reference star with Earth, Mars, Venus and Kepler-442b
    pub fn reference() -> Self {
        Self {
            star: StarParameters::solar_reference(),
            planets: [
                earth_analog(),
                mars_analog(),
                venus_analog(),
                kepler_442b_analog(),
            ]
            .into_iter()
            .map(Into::into)
            .collect(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, SystemError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SystemError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SystemError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            planets = config.planets.len(),
            "loaded system configuration"
        );
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, SystemError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every entity and assemble the system
    pub fn build(self) -> Result<StarSystem, SystemError> {
        StarSystem::try_from(self)
    }
}
