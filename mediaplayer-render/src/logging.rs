//! Logging setup for mediaplayer binaries and hosts
//!
//! Library code only emits `tracing` events. Hosts that want to see them call
//! one of the initializers here once, early in start-up.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No subscriber installed
    Silent,
    /// Compact stderr output
    Development,
    /// Verbose output with source locations
    Debug,
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),
}

/// Initialize logging with the specified mode
///
/// # Environment Variables
///
/// - `MEDIAPLAYER_LOG_LEVEL`: filter directive (e.g. `debug`,
///   `mediaplayer_render::resolver=trace`), falling back to `RUST_LOG`
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => {
            let filter = create_env_filter("info")?;

            Registry::default()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .compact(),
                )
                .with(filter)
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Debug => {
            let filter = create_env_filter("debug")?;

            Registry::default()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .pretty()
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
    }
}

/// Initialize logging from `MEDIAPLAYER_LOG_MODE` (`silent`, `development`, `debug`).
///
/// Defaults to silent when unset or unrecognized.
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    init_logging(mode_from_env_value(std::env::var("MEDIAPLAYER_LOG_MODE").ok().as_deref()))
}

/// Initialize compact stderr logging with an explicit filter directive.
pub fn init_with_filter(directive: &str) -> Result<(), LoggingError> {
    let filter = parse_filter(directive)?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| LoggingError::TracingInit(e.to_string()))
}

/// Check a filter directive (a bare level such as `debug`, or a target
/// directive such as `mediaplayer_render::resolver=trace`) without
/// installing anything.
pub fn validate_filter(directive: &str) -> Result<(), LoggingError> {
    parse_filter(directive).map(|_| ())
}

fn parse_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidFilter(e.to_string()))
}

fn mode_from_env_value(value: Option<&str>) -> LoggingMode {
    match value {
        Some("development") => LoggingMode::Development,
        Some("debug") => LoggingMode::Debug,
        _ => LoggingMode::Silent,
    }
}

fn create_env_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    let directive = std::env::var("MEDIAPLAYER_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_level.to_string());

    parse_filter(&directive)
}

/// Check if a global subscriber has been installed
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_mode() {
        assert!(init_logging(LoggingMode::Silent).is_ok());
    }

    #[test]
    fn test_mode_from_env_value() {
        assert_eq!(mode_from_env_value(Some("development")), LoggingMode::Development);
        assert_eq!(mode_from_env_value(Some("debug")), LoggingMode::Debug);
        assert_eq!(mode_from_env_value(Some("loud")), LoggingMode::Silent);
        assert_eq!(mode_from_env_value(None), LoggingMode::Silent);
    }

    #[test]
    fn test_invalid_filter() {
        let result = init_with_filter("mediaplayer=verbose");
        assert!(matches!(result, Err(LoggingError::InvalidFilter(_))));
    }

    #[test]
    fn test_validate_filter() {
        assert!(validate_filter("debug").is_ok());
        assert!(validate_filter("WARN").is_ok());
        assert!(validate_filter("mediaplayer_render::resolver=trace").is_ok());
        assert!(validate_filter("warn,mediaplayer_render=debug").is_ok());
        assert!(matches!(
            validate_filter("mediaplayer_render=verbose"),
            Err(LoggingError::InvalidFilter(_))
        ));
    }

    // Only this test installs a global subscriber in this binary.
    #[test]
    fn test_development_then_debug_mode() {
        let first = init_logging(LoggingMode::Development);
        if std::env::var("MEDIAPLAYER_LOG_LEVEL").is_err() && std::env::var("RUST_LOG").is_err() {
            assert!(first.is_ok());
        }
        if first.is_ok() {
            assert!(is_initialized());
            assert!(matches!(
                init_logging(LoggingMode::Debug),
                Err(LoggingError::TracingInit(_))
            ));
        }
    }
}
