//! Error types for the mediaplayer-render crate.

/// Errors reported when a builder cannot produce markup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Neither the requested nor the default strategy could classify the media object
    #[error("Unknown media type.")]
    UnknownMediaType,
}

/// Errors raised while assembling a resolver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolverError {
    /// No strategy is registered under the default key
    #[error("No strategy registered under the default key: {0}")]
    MissingDefaultStrategy(String),

    /// Invalid configuration provided
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Convenience type alias for render results.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Convenience type alias for resolver setup results.
pub type ResolverResult<T> = std::result::Result<T, ResolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(RenderError::UnknownMediaType.to_string(), "Unknown media type.");
    }

    #[test]
    fn test_resolver_error_display() {
        let error = ResolverError::MissingDefaultStrategy("def".to_string());
        assert_eq!(
            error.to_string(),
            "No strategy registered under the default key: def"
        );

        let error = ResolverError::Configuration("default width must be greater than 0".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: default width must be greater than 0"
        );
    }
}
