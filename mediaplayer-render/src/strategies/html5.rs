use std::sync::Arc;

use mediaplayer_schema::{MediaObject, RenderOptions};

use super::{content_source, embed, Strategy};
use crate::builders::{Builder, NativeVideoBuilder};
use crate::config::RenderConfig;

/// Strategy for browsers with native HTML5 video.
///
/// Same preference order as the default strategy, but direct files become a
/// plain `<video>` with no polyfill.
#[derive(Debug, Clone)]
pub struct Html5Strategy {
    config: Arc<RenderConfig>,
}

impl Html5Strategy {
    pub fn new(config: Arc<RenderConfig>) -> Self {
        Self { config }
    }
}

impl Strategy for Html5Strategy {
    fn name(&self) -> &'static str {
        "html5"
    }

    fn execute(&self, media: &MediaObject, options: &mut RenderOptions) -> Option<Box<dyn Builder>> {
        if !media.is_video() {
            return None;
        }

        if let Some(builder) = embed(media, options, &self.config) {
            return Some(builder);
        }

        if content_source(media, options) {
            return Some(Box::new(NativeVideoBuilder::new(options, &self.config)));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy() -> Html5Strategy {
        Html5Strategy::new(Arc::new(RenderConfig::default()))
    }

    #[test]
    fn test_embed_url_builds_iframe() {
        let media = MediaObject::video()
            .with_embed_url("http://player.vimeo.com/video/1024832")
            .with_content_url("http://x/a.mp4");

        let builder = strategy().execute(&media, &mut RenderOptions::new()).unwrap();
        assert_eq!(builder.name(), "iframe");
    }

    #[test]
    fn test_content_url_builds_native_video() {
        let media = MediaObject::video().with_content_url("http://x/a.mp4");
        let mut options = RenderOptions::new().with_poster("http://x/a.jpg");

        let builder = strategy().execute(&media, &mut options).unwrap();

        assert_eq!(builder.name(), "html5-video");
        assert_eq!(
            builder.to_html().unwrap(),
            "<video width=\"500\" height=\"281\" poster=\"http://x/a.jpg\" controls>\
             <source src=\"http://x/a.mp4\" /></video>"
        );
    }

    #[test]
    fn test_declines_without_urls() {
        assert!(strategy().execute(&MediaObject::video(), &mut RenderOptions::new()).is_none());
        assert!(strategy().execute(&MediaObject::new(), &mut RenderOptions::new()).is_none());
    }
}
