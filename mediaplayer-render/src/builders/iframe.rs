use mediaplayer_schema::RenderOptions;

use super::Builder;
use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::markup::Markup;

/// Embeds a hosted player page in a borderless iframe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IFrameBuilder {
    url: String,
    width: u32,
    height: u32,
    escape: bool,
}

impl IFrameBuilder {
    /// Reads `url`, `width` and `height`; a missing url renders an empty `src`.
    pub fn new(options: &RenderOptions, config: &RenderConfig) -> Self {
        Self {
            url: options.url.clone().unwrap_or_default(),
            width: config.width_or_default(options.width),
            height: config.height_or_default(options.height),
            escape: config.escape_attributes,
        }
    }
}

impl Builder for IFrameBuilder {
    fn name(&self) -> &'static str {
        "iframe"
    }

    fn to_html(&self) -> RenderResult<String> {
        let mut markup = Markup::new(self.escape);
        markup
            .raw("<iframe")
            .attr("src", &self.url)
            .num_attr("width", self.width)
            .num_attr("height", self.height)
            .raw(" frameborder=\"0\"></iframe>");

        Ok(markup.finish())
    }
}
