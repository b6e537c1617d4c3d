//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LEARNWISE` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment loads.
//!
//! # Example
//!
//! ```no_run
//! use learnwise::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Sharing links under {}", config.share.base_url);
//! ```

mod content;
mod error;
mod logging;
mod share;
mod voice;

pub use content::ContentConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use share::ShareConfig;
pub use voice::{VoiceConfig, DEFAULT_AGENT_ID};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Base URL for shareable profile links
    #[serde(default)]
    pub share: ShareConfig,

    /// Content library source
    #[serde(default)]
    pub content: ContentConfig,

    /// Persona to voice agent mapping
    #[serde(default)]
    pub voice: VoiceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LEARNWISE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LEARNWISE__LOGGING__LEVEL=debug` -> `logging.level = debug`
    /// - `LEARNWISE__VOICE__AGENTS__ANXIOUS=agent_x` -> `voice.agents.anxious = agent_x`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LEARNWISE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.share.validate()?;
        self.content.validate()?;
        self.voice.validate()?;
        Ok(())
    }
}
