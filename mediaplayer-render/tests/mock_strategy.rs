//! Mock strategy for testing resolver fallback without real media rules.
//!
//! The mock either builds a fixed iframe or declines, and counts how often it
//! was asked.

#![allow(dead_code)]

use mediaplayer_render::{Builder, IFrameBuilder, RenderConfig, Strategy};
use mediaplayer_schema::{MediaObject, RenderOptions};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub struct MockStrategy {
    name: &'static str,
    url: String,
    should_decline: Arc<AtomicBool>,
    execute_count: Arc<AtomicU32>,
}

impl MockStrategy {
    /// A strategy that always embeds `url`.
    pub fn new(name: &'static str, url: &str) -> Self {
        Self {
            name,
            url: url.to_string(),
            should_decline: Arc::new(AtomicBool::new(false)),
            execute_count: Arc::new(AtomicU32::new(0)),
        }
    }

    /// A strategy that never produces a builder.
    pub fn declining(name: &'static str) -> Self {
        let strategy = Self::new(name, "");
        strategy.set_decline(true);
        strategy
    }

    pub fn set_decline(&self, decline: bool) {
        self.should_decline.store(decline, Ordering::SeqCst);
    }

    pub fn execute_count(&self) -> u32 {
        self.execute_count.load(Ordering::SeqCst)
    }
}

impl Strategy for MockStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn execute(&self, _media: &MediaObject, options: &mut RenderOptions) -> Option<Box<dyn Builder>> {
        self.execute_count.fetch_add(1, Ordering::SeqCst);

        if self.should_decline.load(Ordering::SeqCst) {
            return None;
        }

        options.extend(RenderOptions::new().with_url(self.url.clone()));
        Some(Box::new(IFrameBuilder::new(options, &RenderConfig::default())))
    }
}
