use std::sync::Arc;

use mediaplayer_schema::{MediaObject, RenderOptions};

use super::{content_source, embed, Strategy};
use crate::builders::{Builder, NativeAudioBuilder};
use crate::config::RenderConfig;

/// Strategy for `AudioObject`s: hosted players first, then a native `<audio>`.
///
/// Only reachable by name; video objects are declined so they fall through
/// to the default strategy.
#[derive(Debug, Clone)]
pub struct AudioStrategy {
    config: Arc<RenderConfig>,
}

impl AudioStrategy {
    pub fn new(config: Arc<RenderConfig>) -> Self {
        Self { config }
    }
}

impl Strategy for AudioStrategy {
    fn name(&self) -> &'static str {
        "audio"
    }

    fn execute(&self, media: &MediaObject, options: &mut RenderOptions) -> Option<Box<dyn Builder>> {
        if !media.is_audio() {
            return None;
        }

        if let Some(builder) = embed(media, options, &self.config) {
            return Some(builder);
        }

        if content_source(media, options) {
            return Some(Box::new(NativeAudioBuilder::new(options, &self.config)));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy() -> AudioStrategy {
        AudioStrategy::new(Arc::new(RenderConfig::default()))
    }

    #[test]
    fn test_content_url_builds_audio() {
        let media = MediaObject::audio().with_content_url("http://x/a.mp3");

        let builder = strategy().execute(&media, &mut RenderOptions::new()).unwrap();

        assert_eq!(builder.name(), "html5-audio");
        assert_eq!(
            builder.to_html().unwrap(),
            "<audio controls><source src=\"http://x/a.mp3\" /></audio>"
        );
    }

    #[test]
    fn test_embed_url_builds_iframe() {
        let media = MediaObject::audio()
            .with_embed_url("http://x/player")
            .with_content_url("http://x/a.mp3");

        let builder = strategy().execute(&media, &mut RenderOptions::new()).unwrap();
        assert_eq!(builder.name(), "iframe");
    }

    #[test]
    fn test_declines_video() {
        let media = MediaObject::video().with_content_url("http://x/a.mp4");
        assert!(strategy().execute(&media, &mut RenderOptions::new()).is_none());
    }
}
