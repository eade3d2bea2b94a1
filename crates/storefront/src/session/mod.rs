//! Session state and route guarding.
//!
//! [`SessionGuard`] holds the authentication flag backed by a persisted
//! token and decides, per navigation, whether a requested view is reachable
//! or must redirect to sign-in. An unauthenticated access attempt is not an
//! error - it is a deterministic redirect, and the denied request's target
//! is remembered so a following sign-in can resume there.

mod store;

pub use store::{FileTokenStore, InMemoryTokenStore, SessionStoreError, TokenStore};

use crate::routes::Route;
use crate::services::auth::{AuthError, Authenticator, Credentials};

/// Outcome of checking a route against the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// The requested view may render.
    Granted,
    /// The requested view is unreachable; redirect and remember the target.
    Denied {
        /// Where to send the visitor instead (always the sign-in page).
        redirect_to: Route,
        /// The originally requested route, preserved for re-entry.
        resume: Route,
    },
}

/// Authentication state machine: `Anonymous` or `Authenticated`, decided
/// solely by token presence.
///
/// The guard loads any persisted token at construction, writes one on
/// sign-in, and clears it on sign-out. Credential verification is delegated
/// to an injected [`Authenticator`].
pub struct SessionGuard {
    store: Box<dyn TokenStore>,
    token: Option<String>,
    resume: Option<Route>,
}

impl SessionGuard {
    /// Create a guard over the given store, restoring any persisted session.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted token cannot be loaded.
    pub fn new(store: Box<dyn TokenStore>) -> Result<Self, SessionStoreError> {
        let token = store.load()?;
        if token.is_some() {
            tracing::info!("restored persisted session");
        }
        Ok(Self {
            store,
            token,
            resume: None,
        })
    }

    /// Whether the session is authenticated.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Check whether the requested route may render.
    ///
    /// Unguarded routes are always granted. Guarded routes are granted iff
    /// the session is authenticated; otherwise the result is a redirect to
    /// sign-in and the requested route is remembered as the resume target
    /// for the next successful sign-in.
    pub fn check_access(&mut self, route: &Route) -> Access {
        if !route.is_guarded() || self.is_authenticated() {
            return Access::Granted;
        }

        tracing::info!(path = %route.path(), "unauthenticated access, redirecting to sign-in");
        self.resume = Some(route.clone());
        Access::Denied {
            redirect_to: Route::SignIn,
            resume: route.clone(),
        }
    }

    /// Sign in with the given credentials.
    ///
    /// Verification is delegated to `authenticator`; on success the issued
    /// token is persisted and the guard becomes `Authenticated`. Returns the
    /// route to resume: the target of the navigation that was denied before
    /// sign-in, or home.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if verification fails, or a store error wrapped
    /// as [`AuthError::SessionStore`] if the token cannot be persisted.
    pub fn sign_in(
        &mut self,
        credentials: &Credentials,
        authenticator: &dyn Authenticator,
    ) -> Result<Route, AuthError> {
        let token = authenticator.verify(credentials)?;

        self.store.save(token.as_str())?;
        self.token = Some(token.into_inner());
        tracing::info!(email = %credentials.email, "signed in");

        Ok(self.resume.take().unwrap_or(Route::Home))
    }

    /// Sign out, clearing the token from memory and the persisted store.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted token cannot be cleared; the
    /// in-memory session is dropped regardless, so the guard is always
    /// `Anonymous` afterwards.
    pub fn sign_out(&mut self) -> Result<(), SessionStoreError> {
        self.token = None;
        self.resume = None;
        let result = self.store.clear();
        tracing::info!("signed out");
        result
    }
}

impl std::fmt::Debug for SessionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGuard")
            .field("authenticated", &self.is_authenticated())
            .field("resume", &self.resume)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::auth::DemoAuthenticator;

    fn guard() -> SessionGuard {
        SessionGuard::new(Box::new(InMemoryTokenStore::new())).unwrap()
    }

    fn authenticator() -> DemoAuthenticator {
        DemoAuthenticator::new("user123@gmail.com", "123123")
    }

    fn sign_in(guard: &mut SessionGuard) -> Route {
        guard
            .sign_in(
                &Credentials::new("user123@gmail.com", "123123"),
                &authenticator(),
            )
            .unwrap()
    }

    #[test]
    fn test_anonymous_guarded_route_redirects() {
        let mut guard = guard();
        let access = guard.check_access(&Route::Cart);
        assert_eq!(
            access,
            Access::Denied {
                redirect_to: Route::SignIn,
                resume: Route::Cart,
            }
        );
    }

    #[test]
    fn test_anonymous_unguarded_route_granted() {
        let mut guard = guard();
        assert_eq!(guard.check_access(&Route::SignIn), Access::Granted);
        assert_eq!(guard.check_access(&Route::SignUp), Access::Granted);
        assert_eq!(guard.check_access(&Route::ForgotPassword), Access::Granted);
        assert_eq!(guard.check_access(&Route::Error), Access::Granted);
    }

    #[test]
    fn test_sign_in_resumes_denied_route() {
        let mut guard = guard();
        guard.check_access(&Route::Checkout);

        let resume = sign_in(&mut guard);
        assert_eq!(resume, Route::Checkout);
        assert_eq!(guard.check_access(&Route::Checkout), Access::Granted);
    }

    #[test]
    fn test_sign_in_without_denial_resumes_home() {
        let mut guard = guard();
        assert_eq!(sign_in(&mut guard), Route::Home);
    }

    #[test]
    fn test_resume_target_consumed_once() {
        let mut guard = guard();
        guard.check_access(&Route::Order);

        assert_eq!(sign_in(&mut guard), Route::Order);
        guard.sign_out().unwrap();
        // The old resume target must not leak into the next sign-in.
        assert_eq!(sign_in(&mut guard), Route::Home);
    }

    #[test]
    fn test_failed_sign_in_leaves_session_anonymous() {
        let mut guard = guard();
        let result = guard.sign_in(
            &Credentials::new("user123@gmail.com", "wrong-password"),
            &authenticator(),
        );
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(!guard.is_authenticated());
        assert_ne!(guard.check_access(&Route::Home), Access::Granted);
    }

    #[test]
    fn test_sign_out_returns_to_anonymous() {
        let mut guard = guard();
        sign_in(&mut guard);
        assert!(guard.is_authenticated());

        guard.sign_out().unwrap();
        assert!(!guard.is_authenticated());
        assert!(matches!(
            guard.check_access(&Route::Home),
            Access::Denied { .. }
        ));
    }

    #[test]
    fn test_persisted_token_authenticates_fresh_guard() {
        let store = InMemoryTokenStore::with_token("tok-persisted");
        let mut guard = SessionGuard::new(Box::new(store)).unwrap();
        assert!(guard.is_authenticated());
        assert_eq!(guard.check_access(&Route::Products), Access::Granted);
    }
}
