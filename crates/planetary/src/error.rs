use thiserror::Error;

/// Errors raised while validating planet parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanetError {
    #[error("planet name must not be empty")]
    MissingName,

    #[error("invalid parameter `{field}` for planet {planet}: {value} (expected {expected})")]
    InvalidParameter {
        planet: String,
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("invalid atmosphere for planet {planet}: gas `{gas}` has fraction {fraction} (expected a named gas with fraction in [0, 1])")]
    InvalidAtmosphere {
        planet: String,
        gas: String,
        fraction: f64,
    },
}

impl PlanetError {
    /// Name of the offending parameter
    pub fn field(&self) -> &'static str {
        match self {
            PlanetError::MissingName => "name",
            PlanetError::InvalidParameter { field, .. } => field,
            PlanetError::InvalidAtmosphere { .. } => "atmosphere",
        }
    }
}
