//! Navigation surface.
//!
//! # Route Structure
//!
//! ```text
//! /                  - Home page (guarded)
//! /products          - Product listing (guarded)
//! /products/:slug    - Product detail (guarded)
//! /cart              - Cart page (guarded)
//! /checkout          - Checkout review (guarded)
//! /order             - Order confirmation (guarded)
//! /sign_in           - Sign-in page
//! /sign_up           - Sign-up page
//! /forgot_password   - Password reset page
//! *                  - Catch-all error page
//! ```
//!
//! Guarded routes are checked through [`SessionGuard::check_access`] before
//! rendering; the auth pages and the error page stay reachable anonymously
//! so a redirect always terminates.
//!
//! [`SessionGuard::check_access`]: crate::session::SessionGuard::check_access

use serde::{Deserialize, Serialize};

/// A named view in the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Home page.
    Home,
    /// Product listing.
    Products,
    /// Product detail, by slug.
    Product(String),
    /// Cart page.
    Cart,
    /// Checkout review.
    Checkout,
    /// Order confirmation.
    Order,
    /// Sign-in page.
    SignIn,
    /// Sign-up page.
    SignUp,
    /// Password reset page.
    ForgotPassword,
    /// Catch-all error page for unknown paths.
    Error,
}

impl Route {
    /// Resolve a request path to a route.
    ///
    /// Unknown paths resolve to [`Route::Error`]; resolution never fails.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/" => Self::Home,
            "/products" => Self::Products,
            "/cart" => Self::Cart,
            "/checkout" => Self::Checkout,
            "/order" => Self::Order,
            "/sign_in" => Self::SignIn,
            "/sign_up" => Self::SignUp,
            "/forgot_password" => Self::ForgotPassword,
            _ => trimmed.strip_prefix("/products/").map_or(Self::Error, |slug| {
                if slug.is_empty() || slug.contains('/') {
                    Self::Error
                } else {
                    Self::Product(slug.to_owned())
                }
            }),
        }
    }

    /// The request path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Products => "/products".to_owned(),
            Self::Product(slug) => format!("/products/{slug}"),
            Self::Cart => "/cart".to_owned(),
            Self::Checkout => "/checkout".to_owned(),
            Self::Order => "/order".to_owned(),
            Self::SignIn => "/sign_in".to_owned(),
            Self::SignUp => "/sign_up".to_owned(),
            Self::ForgotPassword => "/forgot_password".to_owned(),
            Self::Error => "/error".to_owned(),
        }
    }

    /// Whether this route requires an authenticated session.
    ///
    /// The auth pages and the error page must stay anonymous or the sign-in
    /// redirect would loop.
    #[must_use]
    pub const fn is_guarded(&self) -> bool {
        !matches!(
            self,
            Self::SignIn | Self::SignUp | Self::ForgotPassword | Self::Error
        )
    }
}
