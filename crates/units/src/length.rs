use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Mul, Sub};

/// A distance in astronomical units.
///
/// Orbital distances and habitable zone edges are stored in AU, the unit they
/// are configured in. Serialized as a bare number.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.524);
/// assert!(orbit > Length::from_au(1.0));
/// assert_eq!(orbit.to_au(), 1.524);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    pub fn to_au(&self) -> f64 {
        self.0
    }

    /// Strictly positive and finite
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} AU", p, self.0),
            None => write!(f, "{} AU", self.0),
        }
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

/// Ratio of two lengths (dimensionless)
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}
