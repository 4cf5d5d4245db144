//! Host star record.
//!
//! A [`Star`] can only be obtained through validation, so every star that
//! reaches the habitable zone calculator is known to produce finite, positive
//! bounds.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::StellarError;
use crate::habitable_zone::HabitableZone;
use crate::spectral::SpectralType;

/// Raw stellar properties, as supplied by configuration
///
/// All values are in the units documented on each field and are never
/// rescaled on the way into a [`Star`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarParameters {
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    /// Mass in solar masses (M☉)
    pub mass: f64,
    /// Effective temperature (K)
    pub temperature: f64,
    /// Age in billions of years
    pub age: f64,
    /// Activity level, 0 (quiet) to 1 (very active)
    pub activity: f64,
    /// Host galaxy label
    pub galaxy: String,
    /// Metallicity relative to solar (1.0 = solar)
    pub metallicity: f64,
    /// Magnetic field strength in relative units
    pub magnetic_field: f64,
    /// Rotation period in days
    pub rotation_period: f64,
    pub spectral_class: SpectralType,
}

impl StarParameters {
    /// The Sun, with the reference values at which every habitable zone
    /// correction except activity and magnetic field is neutral
    pub fn solar_reference() -> Self {
        Self {
            luminosity: 1.0,
            mass: 1.0,
            temperature: 5778.0,
            age: 4.6,
            activity: 0.2,
            galaxy: "Milky Way".to_string(),
            metallicity: 1.0,
            magnetic_field: 1.0,
            rotation_period: 25.0,
            spectral_class: SpectralType::G,
        }
    }

    /// Check every field against its physical domain
    pub fn validate(&self) -> Result<(), StellarError> {
        require("luminosity", self.luminosity, "a finite value > 0", positive)?;
        require("mass", self.mass, "a finite value > 0", positive)?;
        require("temperature", self.temperature, "a finite value > 0", positive)?;
        require("age", self.age, "a finite value >= 0", non_negative)?;
        require("activity", self.activity, "a value in [0, 1]", unit_interval)?;
        require("metallicity", self.metallicity, "a finite value >= 0", non_negative)?;
        require(
            "magnetic_field",
            self.magnetic_field,
            "a finite value >= 0",
            non_negative,
        )?;
        require(
            "rotation_period",
            self.rotation_period,
            "a finite value > 0",
            positive,
        )?;

        // The corrections must also yield a usable zone
        HabitableZone::compute(self).map(|_| ())
    }

    /// Class implied by the effective temperature, when it differs from the
    /// configured `spectral_class`
    pub fn temperature_class_mismatch(&self) -> Option<SpectralType> {
        let implied = SpectralType::from_temperature(self.temperature);
        (implied != self.spectral_class).then_some(implied)
    }
}

fn require(
    field: &'static str,
    value: f64,
    expected: &'static str,
    accept: fn(f64) -> bool,
) -> Result<(), StellarError> {
    if accept(value) {
        Ok(())
    } else {
        Err(StellarError::invalid(field, value, expected))
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

/// A validated, immutable host star
///
/// # Examples
///
/// ```
/// use stellar::{Star, StarParameters, StellarError};
///
/// let sun = Star::new(StarParameters::solar_reference()).unwrap();
/// assert_eq!(sun.galaxy(), "Milky Way");
///
/// let dark = StarParameters { luminosity: 0.0, ..StarParameters::solar_reference() };
/// assert!(matches!(Star::new(dark), Err(StellarError::InvalidParameter { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StarParameters", into = "StarParameters")]
pub struct Star(StarParameters);

impl Star {
    pub fn new(parameters: StarParameters) -> Result<Self, StellarError> {
        parameters.validate()?;

        // Informational only; the zone does not depend on the class
        if let Some(implied) = parameters.temperature_class_mismatch() {
            let (min_k, max_k) = parameters.spectral_class.temperature_range();
            warn!(
                temperature = parameters.temperature,
                spectral_class = %parameters.spectral_class,
                class_min_k = min_k,
                class_max_k = max_k,
                implied_class = %implied,
                "spectral class disagrees with effective temperature"
            );
        }

        Ok(Self(parameters))
    }

    pub fn parameters(&self) -> &StarParameters {
        &self.0
    }

    /// Luminosity in solar luminosities (L☉)
    pub fn luminosity(&self) -> f64 {
        self.0.luminosity
    }

    /// Mass in solar masses (M☉)
    pub fn mass(&self) -> f64 {
        self.0.mass
    }

    /// Effective temperature (K)
    pub fn temperature(&self) -> f64 {
        self.0.temperature
    }

    /// Age in billions of years
    pub fn age(&self) -> f64 {
        self.0.age
    }

    pub fn activity(&self) -> f64 {
        self.0.activity
    }

    pub fn galaxy(&self) -> &str {
        &self.0.galaxy
    }

    pub fn metallicity(&self) -> f64 {
        self.0.metallicity
    }

    pub fn magnetic_field(&self) -> f64 {
        self.0.magnetic_field
    }

    /// Rotation period in days
    pub fn rotation_period(&self) -> f64 {
        self.0.rotation_period
    }

    pub fn spectral_class(&self) -> SpectralType {
        self.0.spectral_class
    }

    /// Habitable zone of this star
    ///
    /// Construction already proved the zone computable, but the calculator
    /// keeps its fallible contract.
    pub fn habitable_zone(&self) -> Result<HabitableZone, StellarError> {
        HabitableZone::for_star(self)
    }
}

impl TryFrom<StarParameters> for Star {
    type Error = StellarError;

    fn try_from(parameters: StarParameters) -> Result<Self, Self::Error> {
        Star::new(parameters)
    }
}

impl From<Star> for StarParameters {
    fn from(star: Star) -> Self {
        star.0
    }
}

/// The Sun as configured for reference runs
pub fn solar_analog() -> Star {
    Star(StarParameters::solar_reference())
}
