//! Application state shared across views.
//!
//! `AppState` wires the cart, the session guard, and the injected
//! collaborators (catalog, authenticator, token store) together and exposes
//! the navigation entry point. All views within a session read the same
//! state; writes are serialized by the single-threaded event model, so no
//! locking is involved.

use crate::cart::CartStore;
use crate::catalog::{CatalogProvider, DemoCatalog};
use crate::checkout::{self, Order};
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::routes::Route;
use crate::services::auth::{Authenticator, Credentials, DemoAuthenticator};
use crate::session::{Access, FileTokenStore, InMemoryTokenStore, SessionGuard, TokenStore};

/// Application state for one storefront session.
pub struct AppState {
    config: StorefrontConfig,
    catalog: Box<dyn CatalogProvider>,
    authenticator: Box<dyn Authenticator>,
    cart: CartStore,
    session: SessionGuard,
}

impl AppState {
    /// Create application state from injected collaborators.
    ///
    /// The cart starts empty; the session guard restores any token the
    /// store already holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted session cannot be loaded.
    pub fn new(
        config: StorefrontConfig,
        catalog: Box<dyn CatalogProvider>,
        authenticator: Box<dyn Authenticator>,
        store: Box<dyn TokenStore>,
    ) -> Result<Self> {
        let session = SessionGuard::new(store)?;
        Ok(Self {
            config,
            catalog,
            authenticator,
            cart: CartStore::new(),
            session,
        })
    }

    /// Create application state from environment configuration, with the
    /// demo catalog and demo authenticator.
    ///
    /// Uses a file-backed token store when `CUTE_SHOP_SESSION_FILE` is set,
    /// an in-memory store otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the persisted
    /// session cannot be loaded.
    pub fn from_env() -> Result<Self> {
        let config = StorefrontConfig::from_env()?;

        let store: Box<dyn TokenStore> = match &config.session_file {
            Some(path) => Box::new(FileTokenStore::new(path.clone())),
            None => Box::new(InMemoryTokenStore::new()),
        };
        let authenticator = Box::new(DemoAuthenticator::new(
            config.demo_email.as_str(),
            secrecy::ExposeSecret::expose_secret(&config.demo_password),
        ));

        Self::new(config, Box::new(DemoCatalog::seeded()), authenticator, store)
    }

    /// Resolve a navigation request to the route that should render.
    ///
    /// The path is parsed (unknown paths fall through to the error view)
    /// and checked against the session guard; a denied guarded route
    /// resolves to the sign-in redirect with the target remembered for
    /// re-entry.
    pub fn navigate(&mut self, path: &str) -> Route {
        let route = Route::parse(path);
        match self.session.check_access(&route) {
            Access::Granted => route,
            Access::Denied { redirect_to, .. } => redirect_to,
        }
    }

    /// Sign in and return the route to resume.
    ///
    /// # Errors
    ///
    /// Returns an error if verification fails or the token cannot be
    /// persisted.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<Route> {
        let credentials = Credentials::new(email, password);
        let resume = self
            .session
            .sign_in(&credentials, self.authenticator.as_ref())?;
        Ok(resume)
    }

    /// Sign out, returning the session to anonymous.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted token cannot be cleared.
    pub fn sign_out(&mut self) -> Result<()> {
        self.session.sign_out()?;
        Ok(())
    }

    /// Place an order from the current cart (simulated checkout).
    ///
    /// # Errors
    ///
    /// Returns an error if the cart is empty.
    pub fn place_order(&mut self) -> Result<Order> {
        Ok(checkout::place_order(&mut self.cart)?)
    }

    /// Storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The catalog collaborator.
    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogProvider {
        self.catalog.as_ref()
    }

    /// The cart, read-only.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The cart, for mutation from UI callbacks.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The session guard, read-only.
    #[must_use]
    pub const fn session(&self) -> &SessionGuard {
        &self.session
    }
}
