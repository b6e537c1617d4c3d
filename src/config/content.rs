//! Content library configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Content library source
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ContentConfig {
    /// YAML library file; the built-in library is used when unset
    pub library_path: Option<PathBuf>,
}

impl ContentConfig {
    /// Validate content configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.library_path {
            Some(path) if !path.is_file() => Err(ValidationError::ContentFileMissing(path.clone())),
            _ => Ok(()),
        }
    }
}
