//! Star system structure and the assessment pipeline

use serde::{Deserialize, Serialize};
use tracing::debug;
use units::Length;

use planetary::{HabitabilityAssessment, Planet};
use stellar::{HabitableZone, Star};

use crate::config::SystemConfig;
use crate::error::SystemError;
use crate::scene::Scene;

/// A single host star with its planets
///
/// Planets keep the order they were configured in; every per-planet output
/// of the pipeline follows that order.
///
/// # Examples
///
/// ```
/// use star_system::StarSystem;
/// use planetary::{earth_analog, mars_analog};
/// use stellar::solar_analog;
///
/// let system = StarSystem::new(solar_analog(), vec![earth_analog(), mars_analog()]);
/// let assessment = system.assess().unwrap();
/// assert_eq!(assessment.classifications.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SystemConfig", into = "SystemConfig")]
pub struct StarSystem {
    star: Star,
    planets: Vec<Planet>,
}

impl StarSystem {
    pub fn new(star: Star, planets: Vec<Planet>) -> Self {
        Self { star, planets }
    }

    pub fn star(&self) -> &Star {
        &self.star
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Habitable zone of the host star
    pub fn habitable_zone(&self) -> Result<HabitableZone, SystemError> {
        Ok(HabitableZone::for_star(&self.star)?)
    }

    /// Classify every planet against the given zone, in planet order
    pub fn classify(&self, zone: &HabitableZone) -> Vec<Classification> {
        self.planets
            .iter()
            .map(|planet| Classification::new(planet, zone))
            .collect()
    }

    /// Zone bounds and per-planet classification
    pub fn assess(&self) -> Result<SystemAssessment, SystemError> {
        let zone = self.habitable_zone()?;
        let classifications = self.classify(&zone);

        for rejected in classifications.iter().filter(|c| !c.habitable) {
            debug!(
                planet = %rejected.planet,
                failed = ?rejected.assessment.failed,
                "planet is not potentially habitable"
            );
        }
        debug!(
            planets = classifications.len(),
            habitable = classifications.iter().filter(|c| c.habitable).count(),
            "assessed star system"
        );

        Ok(SystemAssessment {
            zone,
            classifications,
        })
    }

    /// Run the full pipeline down to renderable geometry
    pub fn scene(&self) -> Result<Scene, SystemError> {
        let assessment = self.assess()?;
        Ok(Scene::project(
            &self.star,
            &assessment.zone,
            &assessment.classifications,
        ))
    }
}

impl TryFrom<SystemConfig> for StarSystem {
    type Error = SystemError;

    fn try_from(config: SystemConfig) -> Result<Self, Self::Error> {
        let star = Star::new(config.star)?;
        let planets = config
            .planets
            .into_iter()
            .map(Planet::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(star, planets))
    }
}

impl From<StarSystem> for SystemConfig {
    fn from(system: StarSystem) -> Self {
        SystemConfig {
            star: system.star.into(),
            planets: system.planets.into_iter().map(Into::into).collect(),
        }
    }
}

/// Habitability verdict for one planet
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub planet: String,
    pub orbital_distance: Length,
    /// Potentially habitable: every criterion passed
    pub habitable: bool,
    pub assessment: HabitabilityAssessment,
}

impl Classification {
    pub fn new(planet: &Planet, zone: &HabitableZone) -> Self {
        let assessment =
            HabitabilityAssessment::evaluate(planet, zone.inner_edge(), zone.outer_edge());
        Self {
            planet: planet.name().to_string(),
            orbital_distance: planet.orbital_distance(),
            habitable: assessment.is_habitable(),
            assessment,
        }
    }
}

/// Output of [`StarSystem::assess`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemAssessment {
    pub zone: HabitableZone,
    pub classifications: Vec<Classification>,
}

impl SystemAssessment {
    /// One boolean per planet, in planet order
    pub fn verdicts(&self) -> Vec<bool> {
        self.classifications.iter().map(|c| c.habitable).collect()
    }

    pub fn habitable_planets(&self) -> impl Iterator<Item = &Classification> {
        self.classifications.iter().filter(|c| c.habitable)
    }
}
