//! Planet record and Solar System analogs.

use serde::{Deserialize, Serialize};
use units::Length;

use crate::atmosphere::Atmosphere;
use crate::error::PlanetError;
use crate::habitability::effective_distance;

/// Raw planet properties, as supplied by configuration
///
/// Values are kept in the units documented on each field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetParameters {
    pub name: String,
    /// Orbital semi-major axis (AU)
    pub orbital_distance: Length,
    /// Radius in Earth radii (R⊕)
    pub radius: f64,
    /// Mass in Earth masses (M⊕)
    pub mass: f64,
    #[serde(default)]
    pub atmosphere: Atmosphere,
    /// Surface gravity (m/s²)
    pub gravity: f64,
    /// Orbital eccentricity, 0 (circular) to just below 1
    pub eccentricity: f64,
    /// Magnetic field strength relative to Earth
    pub magnetic_field: f64,
    /// Fraction of the surface covered by water
    pub water_content: f64,
    /// Mean surface temperature (°C)
    pub surface_temp: f64,
    /// Sidereal rotation period (hours)
    pub rotation_period: f64,
    /// Obliquity (degrees)
    pub axial_tilt: f64,
    /// Internal activity proxy (tectonics, volcanism), 0 to 1
    pub geological_activity: f64,
}

impl PlanetParameters {
    /// Check every field against its physical domain
    pub fn validate(&self) -> Result<(), PlanetError> {
        if self.name.trim().is_empty() {
            return Err(PlanetError::MissingName);
        }

        let checks: [(&'static str, f64, &'static str, fn(f64) -> bool); 12] = [
            (
                "orbital_distance",
                self.orbital_distance.to_au(),
                "a finite value > 0 AU",
                positive,
            ),
            ("eccentricity", self.eccentricity, "a value in [0, 1)", |e| {
                (0.0..1.0).contains(&e)
            }),
            ("radius", self.radius, "a finite value > 0", positive),
            ("mass", self.mass, "a finite value > 0", positive),
            ("gravity", self.gravity, "a finite value > 0", positive),
            ("magnetic_field", self.magnetic_field, "a finite value >= 0", non_negative),
            ("water_content", self.water_content, "a value in [0, 1]", unit_interval),
            ("surface_temp", self.surface_temp, "a finite value", f64::is_finite),
            ("rotation_period", self.rotation_period, "a finite value > 0", positive),
            ("axial_tilt", self.axial_tilt, "a value in [0, 180)", |t| {
                (0.0..180.0).contains(&t)
            }),
            (
                "geological_activity",
                self.geological_activity,
                "a value in [0, 1]",
                unit_interval,
            ),
            (
                "effective_distance",
                effective_distance(self.orbital_distance, self.eccentricity).to_au(),
                "a finite value > 0 AU",
                positive,
            ),
        ];

        if let Some((field, value, expected, _)) =
            checks.into_iter().find(|(_, value, _, accept)| !accept(*value))
        {
            return Err(PlanetError::InvalidParameter {
                planet: self.name.clone(),
                field,
                value,
                expected,
            });
        }

        if let Some((gas, fraction)) = self.atmosphere.first_invalid() {
            return Err(PlanetError::InvalidAtmosphere {
                planet: self.name.clone(),
                gas: gas.to_string(),
                fraction,
            });
        }

        Ok(())
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

/// A validated, immutable planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlanetParameters", into = "PlanetParameters")]
pub struct Planet(PlanetParameters);

impl Planet {
    pub fn new(parameters: PlanetParameters) -> Result<Self, PlanetError> {
        parameters.validate()?;
        Ok(Self(parameters))
    }

    pub fn parameters(&self) -> &PlanetParameters {
        &self.0
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn orbital_distance(&self) -> Length {
        self.0.orbital_distance
    }

    /// Radius in Earth radii
    pub fn radius(&self) -> f64 {
        self.0.radius
    }

    /// Mass in Earth masses
    pub fn mass(&self) -> f64 {
        self.0.mass
    }

    pub fn atmosphere(&self) -> &Atmosphere {
        &self.0.atmosphere
    }

    /// Surface gravity (m/s²)
    pub fn gravity(&self) -> f64 {
        self.0.gravity
    }

    pub fn eccentricity(&self) -> f64 {
        self.0.eccentricity
    }

    pub fn magnetic_field(&self) -> f64 {
        self.0.magnetic_field
    }

    pub fn water_content(&self) -> f64 {
        self.0.water_content
    }

    /// Mean surface temperature (°C)
    pub fn surface_temp(&self) -> f64 {
        self.0.surface_temp
    }

    /// Rotation period (hours)
    pub fn rotation_period(&self) -> f64 {
        self.0.rotation_period
    }

    /// Axial tilt (degrees)
    pub fn axial_tilt(&self) -> f64 {
        self.0.axial_tilt
    }

    pub fn geological_activity(&self) -> f64 {
        self.0.geological_activity
    }

    /// Eccentricity-adjusted distance used for the habitable zone check
    pub fn effective_distance(&self) -> Length {
        effective_distance(self.0.orbital_distance, self.0.eccentricity)
    }
}

impl TryFrom<PlanetParameters> for Planet {
    type Error = PlanetError;

    fn try_from(parameters: PlanetParameters) -> Result<Self, Self::Error> {
        Planet::new(parameters)
    }
}

impl From<Planet> for PlanetParameters {
    fn from(planet: Planet) -> Self {
        planet.0
    }
}

// =============================================================================
// Factory functions for Solar System analogs
// =============================================================================

/// Create an Earth analog
pub fn earth_analog() -> Planet {
    Planet(PlanetParameters {
        name: "Earth".to_string(),
        orbital_distance: Length::from_au(1.0),
        radius: 1.0,
        mass: 1.0,
        atmosphere: Atmosphere::from_fractions([("N2", 0.78), ("O2", 0.21)]),
        gravity: 9.81,
        eccentricity: 0.017,
        magnetic_field: 1.0,
        water_content: 0.7,
        surface_temp: 15.0,
        rotation_period: 24.0,
        axial_tilt: 23.5,
        geological_activity: 0.6,
    })
}

/// Create a Mars analog
pub fn mars_analog() -> Planet {
    Planet(PlanetParameters {
        name: "Mars".to_string(),
        orbital_distance: Length::from_au(1.524),
        radius: 0.532,
        mass: 0.107,
        atmosphere: Atmosphere::from_fractions([("CO2", 0.95)]),
        gravity: 3.72,
        eccentricity: 0.094,
        magnetic_field: 0.0,
        water_content: 0.01,
        surface_temp: -63.0,
        rotation_period: 24.6,
        axial_tilt: 25.2,
        geological_activity: 0.1,
    })
}

/// Create a Venus analog
pub fn venus_analog() -> Planet {
    Planet(PlanetParameters {
        name: "Venus".to_string(),
        orbital_distance: Length::from_au(0.723),
        radius: 0.949,
        mass: 0.815,
        atmosphere: Atmosphere::from_fractions([("CO2", 0.96)]),
        gravity: 8.87,
        eccentricity: 0.007,
        magnetic_field: 0.0,
        water_content: 0.0,
        surface_temp: 462.0,
        // Retrograde, 243 day sidereal rotation
        rotation_period: 5832.5,
        axial_tilt: 177.4,
        geological_activity: 0.5,
    })
}

/// Create a Kepler-442b analog
///
/// Only the orbit, radius, mass and gravity are observed; the remaining
/// properties are placeholder estimates.
pub fn kepler_442b_analog() -> Planet {
    Planet(PlanetParameters {
        name: "Kepler-442b".to_string(),
        orbital_distance: Length::from_au(0.409),
        radius: 1.34,
        mass: 2.34,
        atmosphere: Atmosphere::from_fractions([("Unknown", 1.0)]),
        gravity: 11.2,
        eccentricity: 0.04,
        magnetic_field: 0.5,
        water_content: 0.5,
        surface_temp: -2.0,
        rotation_period: 30.0,
        axial_tilt: 20.0,
        geological_activity: 0.4,
    })
}
