//! Resolution of media objects to builders
//!
//! `MediaResolver::resolve` applies a two-level fallback:
//!
//! 1. If the options name a registered strategy, run it.
//! 2. If that produced no builder (or no strategy was named, or the name is
//!    unknown), run the default strategy.
//! 3. If the default strategy declines too, return [`NoMatchBuilder`].
//!
//! Requesting an unknown strategy is therefore never an error; it behaves
//! exactly like requesting none.

use std::sync::Arc;

use mediaplayer_schema::{MediaObject, RenderOptions};
use tracing::{debug, trace};

use crate::builders::{Builder, NoMatchBuilder};
use crate::config::RenderConfig;
use crate::error::{RenderResult, ResolverResult};
use crate::loader::Polyfill;
use crate::registry::StrategyRegistry;

/// Entry point that picks a builder for a media object.
#[derive(Debug, Clone)]
pub struct MediaResolver {
    registry: Arc<StrategyRegistry>,
}

impl MediaResolver {
    pub fn new(registry: Arc<StrategyRegistry>) -> Self {
        Self { registry }
    }

    /// Resolver over the standard registry with a given configuration and polyfill.
    pub fn with_config(config: RenderConfig, polyfill: Polyfill) -> ResolverResult<Self> {
        let registry = StrategyRegistry::standard(config, polyfill)?;
        Ok(Self::new(Arc::new(registry)))
    }

    /// Resolver over the standard registry with default configuration and no polyfill loading.
    pub fn standard() -> ResolverResult<Self> {
        Self::with_config(RenderConfig::default(), Polyfill::disabled())
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Pick a builder for `media`. Always returns a builder.
    pub fn resolve(&self, media: &MediaObject, options: Option<RenderOptions>) -> Box<dyn Builder> {
        let mut options = options.unwrap_or_default();

        if let Some(name) = options.strategy.clone() {
            match self.registry.get(&name) {
                Some(strategy) => {
                    if let Some(builder) = strategy.execute(media, &mut options) {
                        debug!(strategy = %name, builder = builder.name(), "resolved with requested strategy");
                        return builder;
                    }
                    trace!(strategy = %name, "requested strategy declined, trying default");
                }
                None => {
                    debug!(strategy = %name, "unknown strategy requested, using default");
                }
            }
        }

        match self.registry.default_strategy().execute(media, &mut options) {
            Some(builder) => {
                debug!(builder = builder.name(), "resolved with default strategy");
                builder
            }
            None => {
                debug!(kind = %media.kind(), "no strategy matched media object");
                Box::new(NoMatchBuilder)
            }
        }
    }

    /// Resolve and render in one step.
    pub fn render(&self, media: &MediaObject, options: Option<RenderOptions>) -> RenderResult<String> {
        self.resolve(media, options).to_html()
    }
}
