//! Media object descriptions
//!
//! A media object is a JSON-LD style record describing one playable asset:
//!
//! ```json
//! {
//!   "@type": "VideoObject",
//!   "embedURL": "http://player.vimeo.com/video/1024832",
//!   "contentURL": "http://example.com/clip.mp4",
//!   "url": "http://example.com/watch/clip"
//! }
//! ```
//!
//! Every field is optional and anything not listed here is ignored.

use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};

const VIDEO_OBJECT: &str = "VideoObject";
const AUDIO_OBJECT: &str = "AudioObject";

/// Classification of a media object by its type discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// `"VideoObject"`
    Video,
    /// `"AudioObject"`
    Audio,
    /// Any other type name
    Other(String),
    /// No type discriminator at all
    Unknown,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Video => write!(f, "{}", VIDEO_OBJECT),
            Self::Audio => write!(f, "{}", AUDIO_OBJECT),
            Self::Other(name) => write!(f, "{}", name),
            Self::Unknown => write!(f, "<untyped>"),
        }
    }
}

/// Read-only description of a single media item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "MediaObjectRepr")]
pub struct MediaObject {
    /// Type discriminator, e.g. `VideoObject`
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// Page hosting an embeddable player
    #[serde(rename = "embedURL", skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,

    /// Direct URL of the media file
    #[serde(rename = "contentURL", skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,

    /// Canonical page URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Wire form accepting both key spellings.
///
/// The JSON-LD keys (`@type`, `embedURL`, `contentURL`) win when a document
/// carries both spellings of the same field.
#[derive(Deserialize)]
struct MediaObjectRepr {
    #[serde(rename = "@type", default)]
    at_type: Option<String>,
    #[serde(rename = "type", default)]
    plain_type: Option<String>,
    #[serde(rename = "embedURL", default)]
    embed_url: Option<String>,
    #[serde(rename = "embedUrl", default)]
    embed_url_camel: Option<String>,
    #[serde(rename = "contentURL", default)]
    content_url: Option<String>,
    #[serde(rename = "contentUrl", default)]
    content_url_camel: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

impl From<MediaObjectRepr> for MediaObject {
    fn from(repr: MediaObjectRepr) -> Self {
        Self {
            media_type: repr.at_type.or(repr.plain_type),
            embed_url: repr.embed_url.or(repr.embed_url_camel),
            content_url: repr.content_url.or(repr.content_url_camel),
            url: repr.url,
        }
    }
}

impl MediaObject {
    /// Create an empty, untyped media object
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a media object typed as `VideoObject`
    pub fn video() -> Self {
        Self::new().with_type(VIDEO_OBJECT)
    }

    /// Create a media object typed as `AudioObject`
    pub fn audio() -> Self {
        Self::new().with_type(AUDIO_OBJECT)
    }

    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn with_embed_url(mut self, embed_url: impl Into<String>) -> Self {
        self.embed_url = Some(embed_url.into());
        self
    }

    pub fn with_content_url(mut self, content_url: impl Into<String>) -> Self {
        self.content_url = Some(content_url.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Decode a media object from a JSON document.
    ///
    /// The document must be a JSON object. Unknown keys are ignored and
    /// both `@type` and `type` are accepted as the discriminator, with
    /// `@type` taking precedence when both are present.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Decode a media object from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> SchemaResult<Self> {
        if !value.is_object() {
            return Err(SchemaError::JsonDeserializationFailed(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            )));
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Classify this object by its type discriminator.
    ///
    /// Matching is exact: `"videoobject"` is [`MediaKind::Other`].
    pub fn kind(&self) -> MediaKind {
        match self.media_type.as_deref() {
            Some(VIDEO_OBJECT) => MediaKind::Video,
            Some(AUDIO_OBJECT) => MediaKind::Audio,
            Some(other) => MediaKind::Other(other.to_string()),
            None => MediaKind::Unknown,
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind() == MediaKind::Video
    }

    pub fn is_audio(&self) -> bool {
        self.kind() == MediaKind::Audio
    }
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
