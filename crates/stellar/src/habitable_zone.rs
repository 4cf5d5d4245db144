//! Circumstellar habitable zone.
//!
//! The conservative zone edges follow from the stellar flux a planet
//! receives: the inner edge sits where the flux is 1.1 S⊕ and the outer edge
//! where it drops to 0.53 S⊕. Five empirical corrections for stellar age,
//! activity, metallicity, magnetic field and rotation are then multiplied
//! together and applied to both edges alike, so they move the zone without
//! changing its outer/inner ratio.

use serde::Serialize;
use tracing::debug;
use units::Length;

use crate::error::StellarError;
use crate::star::{Star, StarParameters};

/// Effective flux at the inner edge, in Earth insolation units (S⊕)
pub const INNER_EDGE_FLUX: f64 = 1.1;
/// Effective flux at the outer edge, in Earth insolation units (S⊕)
pub const OUTER_EDGE_FLUX: f64 = 0.53;

/// Stellar age (Gyr) at which the age correction is 1.0
pub const REFERENCE_AGE_GYR: f64 = 4.6;
/// Metallicity (relative to solar) at which the metallicity correction is 1.0
pub const REFERENCE_METALLICITY: f64 = 1.0;
/// Rotation period (days) at which the rotation correction is 1.0
pub const REFERENCE_ROTATION_DAYS: f64 = 25.0;

const AGE_SENSITIVITY: f64 = 0.1;
const ACTIVITY_SENSITIVITY: f64 = 0.2;
const METALLICITY_SENSITIVITY: f64 = 0.05;
const MAGNETIC_SENSITIVITY: f64 = 0.1;
const ROTATION_SENSITIVITY: f64 = 0.01;

/// Multiplicative corrections applied to the base habitable zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneFactors {
    pub age: f64,
    pub activity: f64,
    pub metallicity: f64,
    pub magnetic: f64,
    pub rotation: f64,
}

impl ZoneFactors {
    /// Compute the corrections for a set of stellar parameters
    ///
    /// Fails if any correction, or their product, is not finite, or if the
    /// product is not positive.
    pub fn from_parameters(star: &StarParameters) -> Result<Self, StellarError> {
        let factors = Self {
            age: 1.0 + (star.age - REFERENCE_AGE_GYR) * AGE_SENSITIVITY,
            activity: 1.0 - star.activity * ACTIVITY_SENSITIVITY,
            metallicity: 1.0 + (star.metallicity - REFERENCE_METALLICITY) * METALLICITY_SENSITIVITY,
            magnetic: 1.0 + star.magnetic_field * MAGNETIC_SENSITIVITY,
            rotation: 1.0 + (star.rotation_period - REFERENCE_ROTATION_DAYS) * ROTATION_SENSITIVITY,
        };

        let sources = [
            ("age", star.age, factors.age),
            ("activity", star.activity, factors.activity),
            ("metallicity", star.metallicity, factors.metallicity),
            ("magnetic_field", star.magnetic_field, factors.magnetic),
            ("rotation_period", star.rotation_period, factors.rotation),
        ];
        if let Some((field, value, _)) = sources.iter().find(|(_, _, f)| !f.is_finite()) {
            return Err(StellarError::invalid(
                *field,
                *value,
                "a value giving a finite habitable zone correction",
            ));
        }

        let combined = factors.combined();
        if !(combined.is_finite() && combined > 0.0) {
            return Err(StellarError::invalid(
                "zone_multiplier",
                combined,
                "a finite, positive product of habitable zone corrections",
            ));
        }

        Ok(factors)
    }

    /// Product of all corrections
    pub fn combined(&self) -> f64 {
        self.age * self.activity * self.metallicity * self.magnetic * self.rotation
    }
}

/// Habitable zone boundaries
///
/// Invariant: both edges are finite and positive, and `inner_edge < outer_edge`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitableZone {
    inner_edge: Length,
    outer_edge: Length,
}

impl HabitableZone {
    /// Uncorrected conservative zone for a luminosity in L☉
    ///
    /// # Examples
    ///
    /// ```
    /// use stellar::HabitableZone;
    ///
    /// let hz = HabitableZone::from_luminosity(1.0).unwrap();
    /// assert!(hz.inner_edge().to_au() < 1.0 && hz.outer_edge().to_au() > 1.0);
    /// assert!(HabitableZone::from_luminosity(0.0).is_err());
    /// ```
    pub fn from_luminosity(luminosity: f64) -> Result<Self, StellarError> {
        Self::scaled(luminosity, 1.0)
    }

    /// Corrected zone for a set of stellar parameters
    pub fn from_parameters(star: &StarParameters) -> Result<Self, StellarError> {
        let (zone, factors) = Self::compute(star)?;

        debug!(
            luminosity = star.luminosity,
            age_factor = factors.age,
            activity_factor = factors.activity,
            metallicity_factor = factors.metallicity,
            magnetic_factor = factors.magnetic,
            rotation_factor = factors.rotation,
            multiplier = factors.combined(),
            inner_au = zone.inner_edge.to_au(),
            outer_au = zone.outer_edge.to_au(),
            "computed habitable zone"
        );

        Ok(zone)
    }

    /// Corrected zone for a validated star
    pub fn for_star(star: &Star) -> Result<Self, StellarError> {
        Self::from_parameters(star.parameters())
    }

    pub(crate) fn compute(star: &StarParameters) -> Result<(Self, ZoneFactors), StellarError> {
        let factors = ZoneFactors::from_parameters(star)?;
        let zone = Self::scaled(star.luminosity, factors.combined())?;
        Ok((zone, factors))
    }

    fn scaled(luminosity: f64, multiplier: f64) -> Result<Self, StellarError> {
        if !(luminosity.is_finite() && luminosity > 0.0) {
            return Err(StellarError::invalid(
                "luminosity",
                luminosity,
                "a finite value > 0",
            ));
        }

        let inner = (luminosity / INNER_EDGE_FLUX).sqrt() * multiplier;
        let outer = (luminosity / OUTER_EDGE_FLUX).sqrt() * multiplier;

        let zone = Self {
            inner_edge: Length::from_au(inner),
            outer_edge: Length::from_au(outer),
        };
        if !(zone.inner_edge.is_positive()
            && zone.outer_edge.is_positive()
            && zone.inner_edge < zone.outer_edge)
        {
            return Err(StellarError::invalid(
                "luminosity",
                luminosity,
                "a value giving finite, ordered habitable zone edges",
            ));
        }

        Ok(zone)
    }

    pub fn inner_edge(&self) -> Length {
        self.inner_edge
    }

    pub fn outer_edge(&self) -> Length {
        self.outer_edge
    }

    /// `(inner, outer)` edges in AU
    pub fn bounds(&self) -> (f64, f64) {
        (self.inner_edge.to_au(), self.outer_edge.to_au())
    }

    pub fn width(&self) -> Length {
        self.outer_edge - self.inner_edge
    }

    /// Whether a distance lies within the zone, edges included
    pub fn contains(&self, distance: Length) -> bool {
        self.inner_edge <= distance && distance <= self.outer_edge
    }
}
