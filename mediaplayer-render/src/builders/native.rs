use mediaplayer_schema::RenderOptions;

use super::Builder;
use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::markup::Markup;

/// Plain HTML5 `<video>` element, no polyfill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeVideoBuilder {
    sources: Vec<String>,
    poster: Option<String>,
    width: u32,
    height: u32,
    escape: bool,
}

impl NativeVideoBuilder {
    pub fn new(options: &RenderOptions, config: &RenderConfig) -> Self {
        Self {
            sources: options.sources().to_vec(),
            poster: options.poster.clone().filter(|p| !p.is_empty()),
            width: config.width_or_default(options.width),
            height: config.height_or_default(options.height),
            escape: config.escape_attributes,
        }
    }
}

impl Builder for NativeVideoBuilder {
    fn name(&self) -> &'static str {
        "html5-video"
    }

    fn to_html(&self) -> RenderResult<String> {
        let mut markup = Markup::new(self.escape);
        markup
            .raw("<video")
            .num_attr("width", self.width)
            .num_attr("height", self.height);
        if let Some(poster) = &self.poster {
            markup.attr("poster", poster);
        }
        markup
            .raw(" controls>")
            .sources(&self.sources, None)
            .raw("</video>");

        Ok(markup.finish())
    }
}

/// Plain HTML5 `<audio>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeAudioBuilder {
    sources: Vec<String>,
    escape: bool,
}

impl NativeAudioBuilder {
    pub fn new(options: &RenderOptions, config: &RenderConfig) -> Self {
        Self {
            sources: options.sources().to_vec(),
            escape: config.escape_attributes,
        }
    }
}

impl Builder for NativeAudioBuilder {
    fn name(&self) -> &'static str {
        "html5-audio"
    }

    fn to_html(&self) -> RenderResult<String> {
        let mut markup = Markup::new(self.escape);
        markup
            .raw("<audio controls>")
            .sources(&self.sources, None)
            .raw("</audio>");

        Ok(markup.finish())
    }
}
