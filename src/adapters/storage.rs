use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    /// Absolute paths ignore the base path.
    fn read_to_string(&self, path: &str) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);
        tracing::debug!("Reading {}", full_path.display());
        Ok(fs::read_to_string(full_path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_relative_to_base_path() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("eq.txt"), "1 2 1").unwrap();

        let storage = LocalStorage::new(dir.path());
        assert_eq!(storage.read_to_string("eq.txt").unwrap(), "1 2 1");
        assert!(storage.read_to_string("missing.txt").is_err());
    }
}
