use std::sync::Arc;

use mediaplayer_schema::{MediaObject, RenderOptions};
use tracing::trace;

use super::{content_source, embed, Strategy};
use crate::builders::{Builder, FallbackVideoBuilder};
use crate::config::RenderConfig;
use crate::loader::Polyfill;

/// The strategy used when none is requested.
///
/// For `VideoObject`s an `embedURL` becomes an iframe; otherwise a
/// `contentURL` becomes a video.js-marked `<video>` backed by the polyfill.
/// Anything else is declined.
#[derive(Debug, Clone)]
pub struct DefaultStrategy {
    config: Arc<RenderConfig>,
    polyfill: Polyfill,
}

impl DefaultStrategy {
    pub fn new(config: Arc<RenderConfig>, polyfill: Polyfill) -> Self {
        Self { config, polyfill }
    }
}

impl Strategy for DefaultStrategy {
    fn name(&self) -> &'static str {
        "default"
    }

    fn execute(&self, media: &MediaObject, options: &mut RenderOptions) -> Option<Box<dyn Builder>> {
        if !media.is_video() {
            trace!(kind = %media.kind(), "default strategy only handles video objects");
            return None;
        }

        if let Some(builder) = embed(media, options, &self.config) {
            return Some(builder);
        }

        if content_source(media, options) {
            return Some(Box::new(FallbackVideoBuilder::new(
                options,
                &self.config,
                self.polyfill.clone(),
            )));
        }

        None
    }
}
