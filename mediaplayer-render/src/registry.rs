//! Named strategy registry
//!
//! The registry is assembled once at start-up and never changes afterwards,
//! so it can be shared (behind an `Arc`) by any number of concurrent
//! resolutions without locking.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::RenderConfig;
use crate::error::{ResolverError, ResolverResult};
use crate::loader::Polyfill;
use crate::strategies::{AudioStrategy, DefaultStrategy, Html5Strategy, Strategy};

/// Registry key of the HTML5 strategy
pub const HTML5_STRATEGY: &str = "html5";

/// Registry key of the audio strategy
pub const AUDIO_STRATEGY: &str = "audio";

/// Immutable mapping from strategy name to strategy, including a default.
#[derive(Clone)]
pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<dyn Strategy>>,
    default_key: String,
}

impl StrategyRegistry {
    /// Start assembling a custom registry whose default key comes from `config`.
    pub fn builder(config: &RenderConfig) -> StrategyRegistryBuilder {
        StrategyRegistryBuilder::new(config.default_strategy.clone())
    }

    /// The stock registry: the default strategy under `config.default_strategy`,
    /// plus `html5` and `audio`.
    pub fn standard(config: RenderConfig, polyfill: Polyfill) -> ResolverResult<Self> {
        config.validate()?;

        let config = Arc::new(config);
        Self::builder(&config)
            .with_strategy(
                config.default_strategy.clone(),
                DefaultStrategy::new(Arc::clone(&config), polyfill),
            )
            .with_strategy(HTML5_STRATEGY, Html5Strategy::new(Arc::clone(&config)))
            .with_strategy(AUDIO_STRATEGY, AudioStrategy::new(Arc::clone(&config)))
            .build()
    }

    /// Look up a strategy by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Strategy>> {
        self.strategies.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }

    /// The strategy registered under the default key.
    pub fn default_strategy(&self) -> &Arc<dyn Strategy> {
        // `build` refuses registries without a default entry.
        &self.strategies[&self.default_key]
    }

    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("strategies", &self.names())
            .field("default_key", &self.default_key)
            .finish()
    }
}

/// Fluent builder for [`StrategyRegistry`].
///
/// ```rust
/// use mediaplayer_render::{Html5Strategy, RenderConfig, StrategyRegistry};
/// use std::sync::Arc;
///
/// let config = RenderConfig::default().with_default_strategy("html5");
/// let registry = StrategyRegistry::builder(&config)
///     .with_strategy("html5", Html5Strategy::new(Arc::new(config.clone())))
///     .build()
///     .unwrap();
/// assert_eq!(registry.names(), vec!["html5"]);
/// ```
pub struct StrategyRegistryBuilder {
    strategies: HashMap<String, Arc<dyn Strategy>>,
    default_key: String,
}

impl StrategyRegistryBuilder {
    fn new(default_key: String) -> Self {
        Self {
            strategies: HashMap::new(),
            default_key,
        }
    }

    /// Register a strategy under `name`, replacing any earlier registration.
    pub fn with_strategy<S>(mut self, name: impl Into<String>, strategy: S) -> Self
    where
        S: Strategy + 'static,
    {
        self.strategies.insert(name.into(), Arc::new(strategy));
        self
    }

    /// Register an already shared strategy under `name`.
    pub fn with_shared_strategy(mut self, name: impl Into<String>, strategy: Arc<dyn Strategy>) -> Self {
        self.strategies.insert(name.into(), strategy);
        self
    }

    /// Finish the registry.
    ///
    /// # Errors
    ///
    /// Returns `ResolverError::MissingDefaultStrategy` if nothing is
    /// registered under the default key.
    pub fn build(self) -> ResolverResult<StrategyRegistry> {
        if !self.strategies.contains_key(&self.default_key) {
            return Err(ResolverError::MissingDefaultStrategy(self.default_key));
        }

        Ok(StrategyRegistry {
            strategies: self.strategies,
            default_key: self.default_key,
        })
    }
}
