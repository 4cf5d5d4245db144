use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Harvard spectral class of a main sequence host star
///
/// Parsed from a single letter, ignoring case and surrounding whitespace,
/// both on the command line and in configuration files.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralType {
    pub const ALL: [SpectralType; 7] = [
        SpectralType::O,
        SpectralType::B,
        SpectralType::A,
        SpectralType::F,
        SpectralType::G,
        SpectralType::K,
        SpectralType::M,
    ];

    /// Effective temperature range (K) conventionally associated with the class
    pub fn temperature_range(&self) -> (f64, f64) {
        match self {
            SpectralType::O => (30_000.0, 50_000.0),
            SpectralType::B => (10_000.0, 30_000.0),
            SpectralType::A => (7_500.0, 10_000.0),
            SpectralType::F => (6_000.0, 7_500.0),
            SpectralType::G => (5_200.0, 6_000.0),
            SpectralType::K => (3_700.0, 5_200.0),
            SpectralType::M => (2_400.0, 3_700.0),
        }
    }

    /// Class whose temperature range contains `temperature` (K)
    ///
    /// Temperatures beyond the O or M limits clamp to those classes.
    pub fn from_temperature(temperature: f64) -> Self {
        match temperature {
            t if t >= 30_000.0 => SpectralType::O,
            t if t >= 10_000.0 => SpectralType::B,
            t if t >= 7_500.0 => SpectralType::A,
            t if t >= 6_000.0 => SpectralType::F,
            t if t >= 5_200.0 => SpectralType::G,
            t if t >= 3_700.0 => SpectralType::K,
            _ => SpectralType::M,
        }
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
        };
        write!(f, "{}", str)
    }
}

/// Error returned when a string is not a single known class letter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown spectral class `{0}` (expected one of O, B, A, F, G, K, M)")]
pub struct UnknownSpectralType(pub String);

impl FromStr for SpectralType {
    type Err = UnknownSpectralType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpectralType::ALL
            .into_iter()
            .find(|class| class.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSpectralType(s.to_string()))
    }
}

impl TryFrom<String> for SpectralType {
    type Error = UnknownSpectralType;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}
