use std::path::PathBuf;

use planetary::PlanetError;
use stellar::StellarError;
use thiserror::Error;

/// Errors surfaced while loading or assembling a star system
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    InvalidStarParameter(#[from] StellarError),

    #[error(transparent)]
    InvalidPlanetParameter(#[from] PlanetError),

    #[error("malformed system configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("cannot read system configuration {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
