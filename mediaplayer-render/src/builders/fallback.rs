use mediaplayer_schema::RenderOptions;

use super::Builder;
use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::loader::Polyfill;
use crate::markup::Markup;

/// Class list that video.js picks up on page load
pub const FALLBACK_MARKER: &str = "video-js vjs-default-skin";

/// HTML5 `<video>` element marked for the video.js player.
///
/// Every source is stamped with the configured MIME type regardless of its
/// extension. After the markup is built the polyfill is asked to make sure
/// the player resources are on the page.
#[derive(Debug, Clone)]
pub struct FallbackVideoBuilder {
    sources: Vec<String>,
    poster: Option<String>,
    width: u32,
    height: u32,
    source_type: String,
    escape: bool,
    polyfill: Polyfill,
}

impl FallbackVideoBuilder {
    pub fn new(options: &RenderOptions, config: &RenderConfig, polyfill: Polyfill) -> Self {
        Self {
            sources: options.sources().to_vec(),
            poster: options.poster.clone().filter(|p| !p.is_empty()),
            width: config.width_or_default(options.width),
            height: config.height_or_default(options.height),
            source_type: config.fallback_source_type.clone(),
            escape: config.escape_attributes,
            polyfill,
        }
    }

    fn markup(&self) -> String {
        let mut markup = Markup::new(self.escape);
        markup
            .raw("<video")
            .num_attr("width", self.width)
            .num_attr("height", self.height);
        if let Some(poster) = &self.poster {
            markup.attr("poster", poster);
        }
        markup
            .raw(" controls")
            .raw(" class=\"")
            .raw(FALLBACK_MARKER)
            .raw("\" data-setup=\"{}\">")
            .sources(&self.sources, Some(self.source_type.as_str()))
            .raw("</video>");

        markup.finish()
    }
}

impl Builder for FallbackVideoBuilder {
    fn name(&self) -> &'static str {
        "video-js"
    }

    fn to_html(&self) -> RenderResult<String> {
        let html = self.markup();
        self.polyfill.ensure_loaded();
        Ok(html)
    }
}
