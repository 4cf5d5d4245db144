//! Renderer-agnostic 2D geometry for a star system.
//!
//! The star sits at the origin and distances are in AU. Orbits are drawn as
//! circles, and every planet marker is placed at the same fixed angle on its
//! orbit (angle zero, on the positive x axis). Positions are not propagated
//! in time.

use nalgebra::Point2;
use serde::Serialize;

use stellar::{HabitableZone, SpectralType, Star};

use crate::system::Classification;

/// Angle (radians) at which every planet marker is placed
pub const PLANET_MARKER_ANGLE: f64 = 0.0;

pub const AXIS_LABEL: &str = "Distance (AU)";
pub const STAR_LABEL: &str = "Star";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Circle {
    pub center: Point2<f64>,
    /// AU
    pub radius: f64,
}

impl Circle {
    pub fn centered(radius: f64) -> Self {
        Self {
            center: Point2::origin(),
            radius,
        }
    }
}

/// Filled ring between two radii
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annulus {
    pub center: Point2<f64>,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl Annulus {
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        let r = nalgebra::distance(&self.center, point);
        self.inner_radius <= r && r <= self.outer_radius
    }
}

/// Habitable zone boundaries and fill
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneGeometry {
    pub inner_boundary: Circle,
    pub outer_boundary: Circle,
    pub fill: Annulus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarMarker {
    pub position: Point2<f64>,
    pub label: String,
    pub spectral_class: SpectralType,
}

/// Binary marker category, taken directly from the habitability verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerCategory {
    PotentiallyHabitable,
    NotHabitable,
}

impl From<bool> for MarkerCategory {
    fn from(habitable: bool) -> Self {
        if habitable {
            MarkerCategory::PotentiallyHabitable
        } else {
            MarkerCategory::NotHabitable
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetMarker {
    pub position: Point2<f64>,
    pub label: String,
    pub category: MarkerCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetGeometry {
    pub orbit: Circle,
    pub marker: PlanetMarker,
}

/// Everything a renderer needs to draw the system
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub title: String,
    pub axis_label: String,
    pub zone: ZoneGeometry,
    pub star: StarMarker,
    /// One entry per planet, in planet order
    pub planets: Vec<PlanetGeometry>,
    /// Largest radius in the scene (AU), for framing the view
    pub extent: f64,
}

impl Scene {
    pub fn project(star: &Star, zone: &HabitableZone, planets: &[Classification]) -> Self {
        let (inner, outer) = zone.bounds();

        let planets: Vec<PlanetGeometry> = planets
            .iter()
            .map(|classified| {
                let radius = classified.orbital_distance.to_au();
                PlanetGeometry {
                    orbit: Circle::centered(radius),
                    marker: PlanetMarker {
                        position: polar(radius, PLANET_MARKER_ANGLE),
                        label: classified.planet.clone(),
                        category: classified.habitable.into(),
                    },
                }
            })
            .collect();

        let extent = planets
            .iter()
            .map(|p| p.orbit.radius)
            .fold(outer, f64::max);

        Self {
            title: format!("Habitable Zone in {}", star.galaxy()),
            axis_label: AXIS_LABEL.to_string(),
            zone: ZoneGeometry {
                inner_boundary: Circle::centered(inner),
                outer_boundary: Circle::centered(outer),
                fill: Annulus {
                    center: Point2::origin(),
                    inner_radius: inner,
                    outer_radius: outer,
                },
            },
            star: StarMarker {
                position: Point2::origin(),
                label: STAR_LABEL.to_string(),
                spectral_class: star.spectral_class(),
            },
            planets,
            extent,
        }
    }

    pub fn markers_in(&self, category: MarkerCategory) -> impl Iterator<Item = &PlanetMarker> {
        self.planets
            .iter()
            .map(|p| &p.marker)
            .filter(move |m| m.category == category)
    }
}

fn polar(radius: f64, angle: f64) -> Point2<f64> {
    Point2::new(radius * angle.cos(), radius * angle.sin())
}
