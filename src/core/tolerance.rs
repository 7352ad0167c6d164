use crate::utils::error::Result;
use crate::utils::validation::{validate_finite, validate_range};

pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Absolute threshold below which a value counts as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(f64);

impl Tolerance {
    pub fn new(value: f64) -> Result<Self> {
        validate_finite("tolerance", value)?;
        validate_range("tolerance", value, f64::MIN_POSITIVE, 1.0)?;
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `|value| < tolerance`. NaN is never zero.
    #[inline]
    pub fn is_zero(self, value: f64) -> bool {
        value.abs() < self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(DEFAULT_TOLERANCE)
    }
}
