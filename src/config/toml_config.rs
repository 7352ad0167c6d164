use crate::utils::error::{QuadError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every table and key may be omitted.
///
/// ```toml
/// [solver]
/// tolerance = 1e-7
///
/// [output]
/// precision = 5
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub solver: Option<SolverConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverConfig {
    pub tolerance: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub precision: Option<usize>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuadError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| QuadError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}
