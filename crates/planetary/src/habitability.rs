//! Potential habitability classification.
//!
//! A planet is potentially habitable only when its eccentricity-adjusted
//! orbital distance falls inside the habitable zone and every physical
//! criterion below holds. There is no scoring: a single failed criterion
//! vetoes the planet.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::trace;
use units::Length;

use crate::planet::Planet;

/// Planet mass range (M⊕)
pub const MASS_RANGE: RangeInclusive<f64> = 0.1..=10.0;
/// Surface gravity range (m/s²)
pub const GRAVITY_RANGE: RangeInclusive<f64> = 5.0..=15.0;
/// Minimum magnetic field relative to Earth
pub const MIN_MAGNETIC_FIELD: f64 = 0.1;
/// Surface temperature range (°C)
pub const SURFACE_TEMP_RANGE: RangeInclusive<f64> = -50.0..=50.0;
/// Rotation period range (hours)
pub const ROTATION_PERIOD_RANGE: RangeInclusive<f64> = 10.0..=40.0;
/// Axial tilt range (degrees)
pub const AXIAL_TILT_RANGE: RangeInclusive<f64> = 10.0..=45.0;
/// Geological activity must exceed this (exclusive)
pub const MIN_GEOLOGICAL_ACTIVITY: f64 = 0.2;

/// Eccentricity-adjusted orbital distance
///
/// `a × (1 − e²)^¼`: the time-averaged flux on an eccentric orbit is higher
/// than on a circular orbit of the same semi-major axis.
///
/// # Examples
/// ```
/// use planetary::habitability::effective_distance;
/// use units::Length;
///
/// let d = effective_distance(Length::from_au(1.0), 0.5);
/// assert!((d.to_au() - 0.9306).abs() < 1e-4);
/// ```
pub fn effective_distance(orbital_distance: Length, eccentricity: f64) -> Length {
    orbital_distance * (1.0 - eccentricity.powi(2)).powf(0.25)
}

/// One independent habitability criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HabitabilityCheck {
    /// Effective distance within the zone, edges included
    HabitableZone,
    /// At least one gas listed
    Atmosphere,
    Mass,
    Gravity,
    MagneticField,
    /// Any surface water at all
    Water,
    SurfaceTemperature,
    RotationPeriod,
    AxialTilt,
    GeologicalActivity,
}

impl HabitabilityCheck {
    /// Every criterion, in evaluation order
    pub const ALL: [HabitabilityCheck; 10] = [
        HabitabilityCheck::HabitableZone,
        HabitabilityCheck::Atmosphere,
        HabitabilityCheck::Mass,
        HabitabilityCheck::Gravity,
        HabitabilityCheck::MagneticField,
        HabitabilityCheck::Water,
        HabitabilityCheck::SurfaceTemperature,
        HabitabilityCheck::RotationPeriod,
        HabitabilityCheck::AxialTilt,
        HabitabilityCheck::GeologicalActivity,
    ];

    pub fn passes(&self, planet: &Planet, inner_bound: Length, outer_bound: Length) -> bool {
        match self {
            HabitabilityCheck::HabitableZone => {
                let distance = planet.effective_distance();
                inner_bound <= distance && distance <= outer_bound
            }
            HabitabilityCheck::Atmosphere => !planet.atmosphere().is_empty(),
            HabitabilityCheck::Mass => MASS_RANGE.contains(&planet.mass()),
            HabitabilityCheck::Gravity => GRAVITY_RANGE.contains(&planet.gravity()),
            HabitabilityCheck::MagneticField => planet.magnetic_field() >= MIN_MAGNETIC_FIELD,
            HabitabilityCheck::Water => planet.water_content() > 0.0,
            HabitabilityCheck::SurfaceTemperature => {
                SURFACE_TEMP_RANGE.contains(&planet.surface_temp())
            }
            HabitabilityCheck::RotationPeriod => {
                ROTATION_PERIOD_RANGE.contains(&planet.rotation_period())
            }
            HabitabilityCheck::AxialTilt => AXIAL_TILT_RANGE.contains(&planet.axial_tilt()),
            HabitabilityCheck::GeologicalActivity => {
                planet.geological_activity() > MIN_GEOLOGICAL_ACTIVITY
            }
        }
    }
}

impl fmt::Display for HabitabilityCheck {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            HabitabilityCheck::HabitableZone => "habitable zone",
            HabitabilityCheck::Atmosphere => "atmosphere",
            HabitabilityCheck::Mass => "mass",
            HabitabilityCheck::Gravity => "gravity",
            HabitabilityCheck::MagneticField => "magnetic field",
            HabitabilityCheck::Water => "water",
            HabitabilityCheck::SurfaceTemperature => "surface temperature",
            HabitabilityCheck::RotationPeriod => "rotation period",
            HabitabilityCheck::AxialTilt => "axial tilt",
            HabitabilityCheck::GeologicalActivity => "geological activity",
        };
        write!(f, "{}", str)
    }
}

/// Outcome of every criterion for one planet
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitabilityAssessment {
    pub effective_distance: Length,
    /// Failed criteria, in evaluation order
    pub failed: Vec<HabitabilityCheck>,
}

impl HabitabilityAssessment {
    pub fn evaluate(planet: &Planet, inner_bound: Length, outer_bound: Length) -> Self {
        let failed: Vec<HabitabilityCheck> = HabitabilityCheck::ALL
            .into_iter()
            .filter(|check| !check.passes(planet, inner_bound, outer_bound))
            .collect();

        trace!(
            planet = planet.name(),
            effective_au = planet.effective_distance().to_au(),
            failed = ?failed,
            "evaluated habitability"
        );

        Self {
            effective_distance: planet.effective_distance(),
            failed,
        }
    }

    pub fn is_habitable(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn passed(&self, check: HabitabilityCheck) -> bool {
        !self.failed.contains(&check)
    }
}

/// Whether a planet is potentially habitable given the zone edges
///
/// # Examples
/// ```
/// use planetary::habitability::is_potentially_habitable;
/// use planetary::{earth_analog, venus_analog};
/// use units::Length;
///
/// let (inner, outer) = (Length::from_au(0.95), Length::from_au(1.37));
/// assert!(is_potentially_habitable(&earth_analog(), inner, outer));
/// assert!(!is_potentially_habitable(&venus_analog(), inner, outer));
/// ```
pub fn is_potentially_habitable(planet: &Planet, inner_bound: Length, outer_bound: Length) -> bool {
    HabitabilityCheck::ALL
        .iter()
        .all(|check| check.passes(planet, inner_bound, outer_bound))
}
