//! # mediaplayer-schema
//!
//! Data model for the mediaplayer workspace: the loosely structured media
//! description handed in by callers, and the render options that strategies
//! fill in before a builder turns them into markup.
//!
//! ## Usage
//!
//! ```rust
//! use mediaplayer_schema::{MediaKind, MediaObject, RenderOptions};
//!
//! let media = MediaObject::from_json(
//!     r#"{"@type": "VideoObject", "contentURL": "http://x/a.mp4"}"#,
//! ).unwrap();
//! assert_eq!(media.kind(), MediaKind::Video);
//!
//! let mut options = RenderOptions::new().with_strategy("html5");
//! options.extend(RenderOptions::new().with_sources(vec!["http://x/a.mp4".into()]));
//! assert_eq!(options.strategy.as_deref(), Some("html5"));
//! ```

pub mod error;
pub mod media;
pub mod options;

pub use error::{SchemaError, SchemaResult};
pub use media::{MediaKind, MediaObject};
pub use options::RenderOptions;
