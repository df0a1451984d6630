//! # mediaplayer-render
//!
//! Picks a rendering strategy for a media object at runtime and produces the
//! markup that embeds it.
//!
//! ```rust
//! use mediaplayer_render::MediaResolver;
//! use mediaplayer_schema::{MediaObject, RenderOptions};
//!
//! let resolver = MediaResolver::standard().unwrap();
//! let media = MediaObject::from_json(
//!     r#"{"@type": "VideoObject", "contentURL": "http://x/a.mp4"}"#,
//! ).unwrap();
//!
//! resolver
//!     .resolve(&media, Some(RenderOptions::new().with_strategy("html5")))
//!     .to_html_with(|err, html| {
//!         assert!(err.is_none());
//!         assert!(html.starts_with("<video"));
//!     });
//! ```
//!
//! ## Architecture
//!
//! ```text
//! MediaResolver::resolve(media, options)
//!     ↓  requested strategy, else default
//! Strategy::execute(media, &mut options)
//!     ↓  Some(builder), or NoMatchBuilder
//! Builder::to_html()
//!     ↓
//! markup | RenderError::UnknownMediaType
//! ```
//!
//! The strategy registry is built once and shared read-only. Builders are
//! created fresh for every resolution. The only side effect in the render
//! path, loading the video.js polyfill, goes through the host-supplied
//! [`ResourceLoader`].

pub mod builders;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
mod markup;
pub mod registry;
pub mod resolver;
pub mod strategies;

pub use builders::{
    Builder, FallbackVideoBuilder, IFrameBuilder, NativeAudioBuilder, NativeVideoBuilder, NoMatchBuilder,
};
pub use config::RenderConfig;
pub use error::{RenderError, RenderResult, ResolverError, ResolverResult};
pub use loader::{NativeSupport, NoopLoader, Polyfill, ResourceLoader};
pub use registry::{StrategyRegistry, StrategyRegistryBuilder};
pub use resolver::MediaResolver;
pub use strategies::{AudioStrategy, DefaultStrategy, Html5Strategy, Strategy};
