//! Navigation side effect used outside the router's reach.
//!
//! The API gateway must redirect on 401 from any call site, including ones
//! that run after the originating view is gone, so it cannot hold a router
//! handle. [`Navigator::browser`] assigns `window.location` directly.

use std::sync::Arc;

#[derive(Clone)]
pub struct Navigator(Arc<dyn Fn(&str) + Send + Sync>);

impl Navigator {
    pub fn new(go: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self(Arc::new(go))
    }

    /// Full-page navigation. Skipped when the browser is already at `path`,
    /// so a 401 raised by the login form itself keeps its error message.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(|path| {
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let location = window.location();
                    if location.pathname().ok().as_deref() == Some(path) {
                        return;
                    }
                    let _ = location.set_href(path);
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = path;
            }
        })
    }

    pub fn go(&self, path: &str) {
        (self.0)(path);
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Navigator")
    }
}
