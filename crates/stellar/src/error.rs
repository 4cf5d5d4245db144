use thiserror::Error;

/// Errors raised while validating stellar parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StellarError {
    /// A star parameter is outside its physical domain, or a habitable zone
    /// correction derived from it is not a finite positive number.
    #[error("invalid star parameter `{field}` = {value}: expected {expected}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}

impl StellarError {
    pub(crate) fn invalid(field: &'static str, value: f64, expected: &'static str) -> Self {
        StellarError::InvalidParameter {
            field,
            value,
            expected,
        }
    }

    /// Name of the offending parameter
    pub fn field(&self) -> &'static str {
        match self {
            StellarError::InvalidParameter { field, .. } => field,
        }
    }
}
