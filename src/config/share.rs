//! Share link configuration

use serde::Deserialize;
use url::Url;

use super::error::ValidationError;

/// Where shareable profile links point
#[derive(Debug, Clone, Deserialize)]
pub struct ShareConfig {
    /// Base URL that `?profile=<code>` is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl ShareConfig {
    /// Parsed base URL
    pub fn base_url(&self) -> Result<Url, ValidationError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ValidationError::InvalidShareUrl(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(ValidationError::ShareUrlMustBeHttp),
        }
    }

    /// Validate share configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.base_url().map(|_| ())
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> ShareConfig {
        ShareConfig {
            base_url: url.to_string(),
        }
    }

    #[test]
    fn test_default_is_valid() {
        let url = ShareConfig::default().base_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_https_accepted() {
        assert!(with_url("https://learn.example.org/start").validate().is_ok());
    }

    #[test]
    fn test_unparseable_rejected() {
        assert!(matches!(
            with_url("not a url").validate(),
            Err(ValidationError::InvalidShareUrl(_))
        ));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        assert!(matches!(
            with_url("ftp://files.example.org").validate(),
            Err(ValidationError::ShareUrlMustBeHttp)
        ));
    }
}
