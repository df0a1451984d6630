//! Builders turn a finished set of render options into markup.
//!
//! Every builder is created by a strategy for exactly one resolution, copies
//! what it needs out of the options at construction time, and is consumed by
//! a single call to [`Builder::to_html`]. Builders never see the media object
//! itself; strategies translate it into options first.
//!
//! | Builder                  | Markup                                         |
//! |--------------------------|------------------------------------------------|
//! | [`NativeVideoBuilder`]   | `<video>` with one `<source>` per URL          |
//! | [`FallbackVideoBuilder`] | `<video>` marked for the video.js polyfill     |
//! | [`NativeAudioBuilder`]   | `<audio>` with one `<source>` per URL          |
//! | [`IFrameBuilder`]        | `<iframe>` pointing at a hosted player         |
//! | [`NoMatchBuilder`]       | always fails with [`RenderError::UnknownMediaType`] |

mod fallback;
mod iframe;
mod native;
mod no_match;

pub use fallback::FallbackVideoBuilder;
pub use iframe::IFrameBuilder;
pub use native::{NativeAudioBuilder, NativeVideoBuilder};
pub use no_match::NoMatchBuilder;

use crate::error::{RenderError, RenderResult};

/// Renders markup for one media presentation mode.
///
/// Implementations must be `Send + Sync` so that resolved builders can be
/// handed across threads, and must be pure apart from side effects routed
/// through an injected capability (see [`crate::loader::Polyfill`]).
pub trait Builder: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Produce the markup fragment.
    fn to_html(&self) -> RenderResult<String>;
}

impl dyn Builder {
    /// Callback-style rendering with an error-first signature.
    ///
    /// `callback` runs exactly once. On success it receives `(None, markup)`.
    /// On failure it receives the error together with the error's message as
    /// the payload, so a present error does not imply empty markup.
    pub fn to_html_with<F>(&self, callback: F)
    where
        F: FnOnce(Option<RenderError>, String),
    {
        match self.to_html() {
            Ok(html) => callback(None, html),
            Err(err) => {
                let message = err.to_string();
                callback(Some(err), message)
            }
        }
    }
}

impl std::fmt::Debug for dyn Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Builder({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use mediaplayer_schema::RenderOptions;

    #[test]
    fn test_callback_success() {
        let options = RenderOptions::new().with_url("http://x/v1");
        let builder: Box<dyn Builder> = Box::new(IFrameBuilder::new(&options, &RenderConfig::default()));

        let mut calls = 0;
        builder.to_html_with(|err, html| {
            calls += 1;
            assert!(err.is_none());
            assert!(html.starts_with("<iframe"));
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_callback_failure_carries_message_as_payload() {
        let builder: Box<dyn Builder> = Box::new(NoMatchBuilder);

        let mut calls = 0;
        builder.to_html_with(|err, html| {
            calls += 1;
            assert_eq!(err, Some(RenderError::UnknownMediaType));
            assert_eq!(html, "Unknown media type.");
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_debug_shows_name() {
        let builder: Box<dyn Builder> = Box::new(NoMatchBuilder);
        assert_eq!(format!("{:?}", builder), "Builder(no-match)");
    }
}
