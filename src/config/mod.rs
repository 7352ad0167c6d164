#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::format::DEFAULT_PRECISION;
use crate::core::tolerance::Tolerance;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use toml_config::FileConfig;

pub const MAX_PRECISION: usize = 17;

/// Resolved, immutable run configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub tolerance: Tolerance,
    pub precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Settings {
    /// Layers the values present in `file` over these settings.
    pub fn merge_file(mut self, file: &FileConfig) -> Result<Self> {
        if let Some(tolerance) = file.solver.as_ref().and_then(|s| s.tolerance) {
            self.tolerance = Tolerance::new(tolerance)?;
        }
        if let Some(precision) = file.output.as_ref().and_then(|o| o.precision) {
            self.precision = precision;
        }
        Ok(self)
    }

    pub fn with_overrides(mut self, tolerance: Option<f64>, precision: Option<usize>) -> Result<Self> {
        if let Some(tolerance) = tolerance {
            self.tolerance = Tolerance::new(tolerance)?;
        }
        if let Some(precision) = precision {
            self.precision = precision;
        }
        Ok(self)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        // Tolerance is checked on construction.
        validate_range("precision", self.precision, 1, MAX_PRECISION)
    }
}

impl ConfigProvider for Settings {
    fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    fn precision(&self) -> usize {
        self.precision
    }
}
