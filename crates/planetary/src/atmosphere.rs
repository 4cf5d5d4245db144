//! Atmospheric composition.
//!
//! Compositions are partial by nature: observed planets often come with only
//! the dominant species measured, so fractions are bounded individually but
//! are not required to sum to one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping of gas label (e.g. `"N2"`, `"CO2"`) to volume fraction
///
/// Keys are kept sorted so iteration, serialization and the choice of
/// dominant gas are deterministic.
///
/// # Examples
/// ```
/// use planetary::Atmosphere;
///
/// let air = Atmosphere::from_fractions([("N2", 0.78), ("O2", 0.21)]);
/// assert_eq!(air.dominant_gas(), Some(("N2", 0.78)));
/// assert!(Atmosphere::none().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Atmosphere(BTreeMap<String, f64>);

impl Atmosphere {
    /// Airless body
    pub fn none() -> Self {
        Self(BTreeMap::new())
    }

    pub fn from_fractions<I, S>(fractions: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self(
            fractions
                .into_iter()
                .map(|(gas, fraction)| (gas.into(), fraction))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of listed gases
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fraction(&self, gas: &str) -> Option<f64> {
        self.0.get(gas).copied()
    }

    /// Sum of listed fractions; below 1.0 when the composition is partial
    pub fn total_fraction(&self) -> f64 {
        self.0.values().sum()
    }

    /// Gas with the largest fraction (first label alphabetically on ties)
    pub fn dominant_gas(&self) -> Option<(&str, f64)> {
        let mut dominant: Option<(&str, f64)> = None;
        for (gas, fraction) in self.iter() {
            if dominant.is_none_or(|(_, best)| fraction > best) {
                dominant = Some((gas, fraction));
            }
        }
        dominant
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(gas, &fraction)| (gas.as_str(), fraction))
    }

    /// First entry with a blank label or a fraction outside [0, 1]
    pub(crate) fn first_invalid(&self) -> Option<(&str, f64)> {
        self.iter()
            .find(|(gas, fraction)| gas.trim().is_empty() || !(0.0..=1.0).contains(fraction))
    }
}
