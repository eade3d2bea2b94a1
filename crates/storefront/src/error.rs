//! Unified error handling.
//!
//! Provides a unified `StorefrontError` for operations that cross component
//! boundaries (sign-in touches both the authenticator and the token store).
//! No error here is fatal: the core never terminates the process, cart input
//! problems are normalized away before they become errors, and a denied
//! navigation is a redirect rather than an error.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::session::SessionStoreError;

/// Application-level error type for the storefront core.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Catalog operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Persisted session storage failed.
    #[error("Session storage error: {0}")]
    SessionStore(#[from] SessionStoreError),

    /// Checkout operation failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = StorefrontError::from(CheckoutError::EmptyCart);
        assert_eq!(
            err.to_string(),
            "Checkout error: cannot place an order from an empty cart"
        );

        let err = StorefrontError::from(CatalogError::NotFound("prod-9".to_owned()));
        assert_eq!(err.to_string(), "Catalog error: product not found: prod-9");
    }

    #[test]
    fn test_auth_conversion() {
        let err = StorefrontError::from(AuthError::InvalidCredentials);
        assert!(matches!(err, StorefrontError::Auth(_)));
    }
}
