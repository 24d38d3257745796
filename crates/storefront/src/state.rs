//! Application state shared across handlers.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::router::Router;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The catalog and the
/// configuration are read-only; the cart and the router are the two
/// mutable stores, each behind its own mutex so every state transition
/// is a serialized, atomic step. Guards are never held across an
/// `.await`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: Mutex<CartStore>,
    router: Mutex<Router>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The router is seeded once from the configured initial location,
    /// covering deep links and reloads; the cart starts empty.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        let router = Router::new(&config.initial_location);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart: Mutex::new(CartStore::new()),
                router: Mutex::new(router),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Lock the cart store for a state transition or a derived read.
    #[must_use]
    pub fn cart(&self) -> MutexGuard<'_, CartStore> {
        self.inner.cart.lock()
    }

    /// Lock the router for navigation or a location change.
    #[must_use]
    pub fn router(&self) -> MutexGuard<'_, Router> {
        self.inner.router.lock()
    }
}
