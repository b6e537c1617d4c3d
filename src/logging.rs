//! Logging setup using tracing + tracing-subscriber
//!
//! - Human-readable or JSON lines on stderr (stdout stays free for command output)
//! - Filter from `logging.level`, overridden by `RUST_LOG`
//! - `-v` / `-vv` raise this crate's level to debug / trace

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::LoggingConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Install the global subscriber.
///
/// # Errors
///
/// `InternalError` if the filter directive is invalid or a subscriber is
/// already installed.
pub fn init(config: &LoggingConfig, verbose: u8) -> Result<(), DomainError> {
    let filter = build_env_filter(&config.level, verbose)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(build_console_layer(config.json))
        .try_init()
        .map_err(|e| logging_error(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(level = %config.level, json = config.json, "Logging initialized");
    Ok(())
}

/// `RUST_LOG` if set, otherwise `default_level`, plus the verbosity override.
fn build_env_filter(default_level: &str, verbose: u8) -> Result<EnvFilter, DomainError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|e| logging_error(format!("Invalid log filter '{}': {}", default_level, e)))?,
    };

    let filter = match verbosity_directive(verbose) {
        Some(directive) => filter.add_directive(
            directive
                .parse()
                .map_err(|e| logging_error(format!("Invalid log directive: {}", e)))?,
        ),
        None => filter,
    };

    Ok(filter)
}

fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("learnwise=debug"),
        _ => Some("learnwise=trace"),
    }
}

fn build_console_layer<S>(json: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    if json {
        Box::new(
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
    } else {
        Box::new(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(true)
                .compact(),
        )
    }
}

fn logging_error(message: String) -> DomainError {
    DomainError::new(ErrorCode::InternalError, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_directive() {
        assert_eq!(verbosity_directive(0), None);
        assert_eq!(verbosity_directive(1), Some("learnwise=debug"));
        assert_eq!(verbosity_directive(5), Some("learnwise=trace"));
    }

    #[test]
    fn test_build_env_filter_accepts_default() {
        assert!(build_env_filter("info,learnwise=debug", 2).is_ok());
    }

    #[test]
    fn test_console_layer_builds_both_formats() {
        let _plain = build_console_layer::<tracing_subscriber::Registry>(false);
        let _json = build_console_layer::<tracing_subscriber::Registry>(true);
    }
}
