//! Client-side polyfill loading
//!
//! The fallback video builder marks its markup for the video.js player. When
//! the hosting page has no native support for that player, the stylesheet and
//! script have to be pulled in. This crate never touches a document itself:
//! hosts plug in a [`ResourceLoader`] and a native-support predicate, and the
//! builder asks the resulting [`Polyfill`] to make sure the resources are
//! present once its markup is ready.

use std::sync::Arc;

use tracing::debug;

use crate::config::RenderConfig;

/// Host capability that injects a stylesheet and a script into the page.
///
/// Loading is fire-and-forget: implementations must return promptly and
/// must not report failures back into the render path.
#[cfg_attr(test, mockall::automock)]
pub trait ResourceLoader: Send + Sync {
    fn ensure(&self, stylesheet_url: &str, script_url: &str);
}

/// Loader for targets without a document, such as server-side rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLoader;

impl ResourceLoader for NoopLoader {
    fn ensure(&self, _stylesheet_url: &str, _script_url: &str) {}
}

/// Predicate reporting whether the host already provides the player natively
pub type NativeSupport = Arc<dyn Fn() -> bool + Send + Sync>;

/// Polyfill resources plus the host hooks that decide whether to load them.
#[derive(Clone)]
pub struct Polyfill {
    loader: Arc<dyn ResourceLoader>,
    native_support: NativeSupport,
    stylesheet_url: String,
    script_url: String,
}

impl Polyfill {
    /// Create a polyfill using the resource URLs from `config`.
    pub fn new<F>(loader: Arc<dyn ResourceLoader>, native_support: F, config: &RenderConfig) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            loader,
            native_support: Arc::new(native_support),
            stylesheet_url: config.polyfill_stylesheet_url.clone(),
            script_url: config.polyfill_script_url.clone(),
        }
    }

    /// A polyfill that never loads anything.
    pub fn disabled() -> Self {
        Self::new(Arc::new(NoopLoader), || true, &RenderConfig::default())
    }

    pub fn stylesheet_url(&self) -> &str {
        &self.stylesheet_url
    }

    pub fn script_url(&self) -> &str {
        &self.script_url
    }

    /// Ask the loader for the resources unless the host supports the player natively.
    ///
    /// Returns `true` when a load was requested.
    pub fn ensure_loaded(&self) -> bool {
        if (self.native_support)() {
            return false;
        }

        debug!(
            stylesheet = %self.stylesheet_url,
            script = %self.script_url,
            "requesting video polyfill"
        );
        self.loader.ensure(&self.stylesheet_url, &self.script_url);
        true
    }
}

impl Default for Polyfill {
    fn default() -> Self {
        Self::disabled()
    }
}

impl std::fmt::Debug for Polyfill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Polyfill")
            .field("stylesheet_url", &self.stylesheet_url)
            .field("script_url", &self.script_url)
            .finish_non_exhaustive()
    }
}
