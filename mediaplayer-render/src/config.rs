//! Configuration types for the mediaplayer-render crate
//!
//! `RenderConfig` carries the values builders fall back to when the caller
//! leaves something out, the name of the default strategy, and the polyfill
//! resources the fallback video builder may ask the host to load.

use crate::error::{ResolverError, ResolverResult};

/// Stylesheet of the video.js polyfill
pub const DEFAULT_POLYFILL_STYLESHEET_URL: &str = "http://vjs.zencdn.net/c/video-js.css";

/// Script of the video.js polyfill
pub const DEFAULT_POLYFILL_SCRIPT_URL: &str = "http://vjs.zencdn.net/c/video.js";

/// Registry key of the strategy used when none (or an unknown one) is requested
pub const DEFAULT_STRATEGY: &str = "def";

/// Configuration shared by every builder and strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Player width when the options carry none
    /// Default: 500
    pub default_width: u32,

    /// Player height when the options carry none
    /// Default: 281
    pub default_height: u32,

    /// Registry key of the default strategy
    /// Default: "def"
    pub default_strategy: String,

    /// Stylesheet requested alongside the fallback video markup
    pub polyfill_stylesheet_url: String,

    /// Script requested alongside the fallback video markup
    pub polyfill_script_url: String,

    /// MIME type stamped on every fallback `<source>` element
    /// Default: "video/mp4"
    pub fallback_source_type: String,

    /// HTML-escape attribute values
    /// Default: true
    pub escape_attributes: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_width: 500,
            default_height: 281,
            default_strategy: DEFAULT_STRATEGY.to_string(),
            polyfill_stylesheet_url: DEFAULT_POLYFILL_STYLESHEET_URL.to_string(),
            polyfill_script_url: DEFAULT_POLYFILL_SCRIPT_URL.to_string(),
            fallback_source_type: "video/mp4".to_string(),
            escape_attributes: true,
        }
    }
}

impl RenderConfig {
    /// Create a RenderConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RenderConfig that copies attribute values into markup untouched
    pub fn raw_attributes() -> Self {
        Self {
            escape_attributes: false,
            ..Default::default()
        }
    }

    pub fn with_default_size(mut self, width: u32, height: u32) -> Self {
        self.default_width = width;
        self.default_height = height;
        self
    }

    pub fn with_default_strategy(mut self, name: impl Into<String>) -> Self {
        self.default_strategy = name.into();
        self
    }

    pub fn with_polyfill(mut self, stylesheet_url: impl Into<String>, script_url: impl Into<String>) -> Self {
        self.polyfill_stylesheet_url = stylesheet_url.into();
        self.polyfill_script_url = script_url.into();
        self
    }

    pub fn with_fallback_source_type(mut self, mime: impl Into<String>) -> Self {
        self.fallback_source_type = mime.into();
        self
    }

    /// Width to render, treating a missing or zero value as "use the default"
    pub fn width_or_default(&self, width: Option<u32>) -> u32 {
        width.filter(|w| *w > 0).unwrap_or(self.default_width)
    }

    /// Height to render, treating a missing or zero value as "use the default"
    pub fn height_or_default(&self, height: Option<u32>) -> u32 {
        height.filter(|h| *h > 0).unwrap_or(self.default_height)
    }

    /// Validate the configuration and return any issues
    pub fn validate(&self) -> ResolverResult<()> {
        if self.default_width == 0 || self.default_height == 0 {
            return Err(ResolverError::Configuration(
                "Default width and height must be greater than 0".to_string(),
            ));
        }

        if self.default_strategy.trim().is_empty() {
            return Err(ResolverError::Configuration(
                "Default strategy name must not be empty".to_string(),
            ));
        }

        if self.polyfill_stylesheet_url.is_empty() || self.polyfill_script_url.is_empty() {
            return Err(ResolverError::Configuration(
                "Polyfill stylesheet and script URLs must not be empty".to_string(),
            ));
        }

        if self.fallback_source_type.is_empty() {
            return Err(ResolverError::Configuration(
                "Fallback source type must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.default_width, 500);
        assert_eq!(config.default_height, 281);
        assert_eq!(config.default_strategy, "def");
        assert_eq!(config.fallback_source_type, "video/mp4");
        assert!(config.escape_attributes);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_raw_attributes_preset() {
        let config = RenderConfig::raw_attributes();
        assert!(!config.escape_attributes);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dimension_fallback() {
        let config = RenderConfig::default();
        assert_eq!(config.width_or_default(None), 500);
        assert_eq!(config.width_or_default(Some(0)), 500);
        assert_eq!(config.width_or_default(Some(640)), 640);
        assert_eq!(config.height_or_default(None), 281);
        assert_eq!(config.height_or_default(Some(0)), 281);
        assert_eq!(config.height_or_default(Some(360)), 360);
    }

    #[test]
    fn test_config_validation() {
        let config = RenderConfig::default().with_default_size(0, 281);
        assert!(config.validate().is_err());

        let config = RenderConfig::default().with_default_strategy("  ");
        assert!(config.validate().is_err());

        let config = RenderConfig::default().with_polyfill("", "video.js");
        assert!(config.validate().is_err());

        let config = RenderConfig::default().with_fallback_source_type("");
        assert!(config.validate().is_err());

        let config = RenderConfig::default()
            .with_default_size(640, 360)
            .with_default_strategy("html5")
            .with_polyfill("/css/player.css", "/js/player.js");
        assert!(config.validate().is_ok());
    }
}
