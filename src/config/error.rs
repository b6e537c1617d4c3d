//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid share base URL: {0}")]
    InvalidShareUrl(String),

    #[error("Share base URL must use http or https")]
    ShareUrlMustBeHttp,

    #[error("Voice agent id for '{0}' is empty")]
    EmptyAgentId(String),

    #[error("Content library file not found: {}", .0.display())]
    ContentFileMissing(PathBuf),
}
