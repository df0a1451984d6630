//! Render options shared between strategies and builders

use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};
use crate::media::json_kind;

/// Parameters for rendering one media object.
///
/// Callers fill in what they care about; the selected strategy then merges
/// its own values (`url` for embeds, `sources` for direct files) on top
/// before handing the options to a builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Name of the requested strategy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,

    /// Media URLs, rendered in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,

    /// Placeholder image shown before playback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Player page for iframe embeds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode options from a JSON object. Unknown keys are ignored.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(SchemaError::JsonDeserializationFailed(format!(
                "expected a JSON object for render options, found {}",
                json_kind(&value)
            )));
        }

        Ok(serde_json::from_value(value)?)
    }

    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = Some(sources);
        self
    }

    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Copy every field that is set in `from` over the same field in `self`.
    ///
    /// Fields left unset in `from` keep their current value. This is the
    /// only way strategies write into caller options.
    pub fn extend(&mut self, from: RenderOptions) -> &mut Self {
        let RenderOptions {
            strategy,
            sources,
            poster,
            width,
            height,
            url,
        } = from;

        if strategy.is_some() {
            self.strategy = strategy;
        }
        if sources.is_some() {
            self.sources = sources;
        }
        if poster.is_some() {
            self.poster = poster;
        }
        if width.is_some() {
            self.width = width;
        }
        if height.is_some() {
            self.height = height;
        }
        if url.is_some() {
            self.url = url;
        }

        self
    }

    /// Sources as a slice, empty when none were given
    pub fn sources(&self) -> &[String] {
        self.sources.as_deref().unwrap_or(&[])
    }
}
