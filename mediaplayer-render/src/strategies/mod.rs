//! Strategies decide which builder renders a media object.
//!
//! A strategy inspects the media object, writes whatever the chosen builder
//! needs into the render options, and constructs the builder. A strategy that
//! cannot handle the object returns `None`; the resolver then falls back to
//! the default strategy.
//!
//! Strategies are shared by every resolution, so they must be stateless
//! and thread-safe (`Send + Sync`).
//!
//! ## Example Implementation
//!
//! ```rust
//! use mediaplayer_render::{Builder, IFrameBuilder, RenderConfig, Strategy};
//! use mediaplayer_schema::{MediaObject, RenderOptions};
//!
//! struct PageOnlyStrategy {
//!     config: RenderConfig,
//! }
//!
//! impl Strategy for PageOnlyStrategy {
//!     fn name(&self) -> &'static str {
//!         "page"
//!     }
//!
//!     fn execute(&self, media: &MediaObject, options: &mut RenderOptions) -> Option<Box<dyn Builder>> {
//!         let url = media.url.clone()?;
//!         options.extend(RenderOptions::new().with_url(url));
//!         Some(Box::new(IFrameBuilder::new(options, &self.config)))
//!     }
//! }
//! ```

mod audio;
mod default;
mod html5;

pub use audio::AudioStrategy;
pub use default::DefaultStrategy;
pub use html5::Html5Strategy;

use mediaplayer_schema::{MediaObject, RenderOptions};

use crate::builders::{Builder, IFrameBuilder};
use crate::config::RenderConfig;

/// Maps a media object to a builder.
pub trait Strategy: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Select and construct a builder, or return `None` if this strategy
    /// cannot handle `media`.
    ///
    /// Implementations may write into `options` before constructing the
    /// builder. They must not panic.
    fn execute(&self, media: &MediaObject, options: &mut RenderOptions) -> Option<Box<dyn Builder>>;
}

/// Builds an iframe for a non-empty `embedURL`.
pub(crate) fn embed(
    media: &MediaObject,
    options: &mut RenderOptions,
    config: &RenderConfig,
) -> Option<Box<dyn Builder>> {
    let embed_url = media.embed_url.clone().filter(|u| !u.is_empty())?;
    options.extend(RenderOptions::new().with_url(embed_url));
    Some(Box::new(IFrameBuilder::new(options, config)))
}

/// Writes a non-empty `contentURL` as the single source, returning whether one was present.
pub(crate) fn content_source(media: &MediaObject, options: &mut RenderOptions) -> bool {
    match &media.content_url {
        Some(content_url) if !content_url.is_empty() => {
            options.extend(RenderOptions::new().with_sources(vec![content_url.clone()]));
            true
        }
        _ => false,
    }
}
