//! Integration tests for Cute Shop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cute-shop-integration-tests
//! ```
//!
//! The [`TestContext`] builds an [`AppState`] over a file-backed session
//! store in a unique temp location, so flows can exercise the persisted
//! token lifecycle (a rebuilt state over the same file plays the role of a
//! page reload).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use cute_shop_storefront::catalog::DemoCatalog;
use cute_shop_storefront::config::StorefrontConfig;
use cute_shop_storefront::services::auth::DemoAuthenticator;
use cute_shop_storefront::session::FileTokenStore;
use cute_shop_storefront::state::AppState;

/// Demo account email accepted by the test authenticator.
pub const DEMO_EMAIL: &str = "user123@gmail.com";
/// Demo account password accepted by the test authenticator.
pub const DEMO_PASSWORD: &str = "123123";

/// Test harness around a storefront [`AppState`].
pub struct TestContext {
    /// The state under test.
    pub state: AppState,
    session_file: PathBuf,
}

impl TestContext {
    /// Build a fresh context with an empty session file location.
    ///
    /// # Panics
    ///
    /// Panics if the state cannot be constructed; tests have no use for a
    /// context that failed to set up.
    #[must_use]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        init_logging();
        let session_file = std::env::temp_dir().join(format!(
            "cute-shop-integration-{}.json",
            uuid::Uuid::new_v4()
        ));
        let state = build_state(&session_file);
        Self {
            state,
            session_file,
        }
    }

    /// Rebuild the state over the same session file, simulating a reload.
    #[must_use]
    pub fn reload(mut self) -> Self {
        self.state = build_state(&self.session_file);
        self
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.session_file);
    }
}

fn build_state(session_file: &PathBuf) -> AppState {
    let config = StorefrontConfig::from_lookup(&|key| match key {
        "CUTE_SHOP_SESSION_FILE" => Some(session_file.display().to_string()),
        _ => None,
    })
    .unwrap_or_else(|e| panic!("test config: {e}"));

    AppState::new(
        config,
        Box::new(DemoCatalog::seeded()),
        Box::new(DemoAuthenticator::new(DEMO_EMAIL, DEMO_PASSWORD)),
        Box::new(FileTokenStore::new(session_file.clone())),
    )
    .unwrap_or_else(|e| panic!("test state: {e}"))
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
