use crate::core::tolerance::Tolerance;
use crate::utils::error::Result;

/// A named text source: equation lists and fixture files.
pub trait Storage {
    fn read_to_string(&self, path: &str) -> Result<String>;
}

pub trait ConfigProvider {
    fn tolerance(&self) -> Tolerance;
    /// Significant digits used when rendering numbers.
    fn precision(&self) -> usize;
}
