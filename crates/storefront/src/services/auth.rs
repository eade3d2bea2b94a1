//! Authentication service.
//!
//! Credential verification is a collaborator with unspecified policy: the
//! [`Authenticator`] trait is the seam, and the session guard only cares
//! that verification yields a token. The shipped [`DemoAuthenticator`]
//! checks a single configured email/password pair - checkout is simulated
//! and so is sign-in.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use uuid::Uuid;

use cute_shop_core::{Email, EmailError};

use crate::session::SessionStoreError;

/// Minimum password length accepted by the sign-in form.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password too short or otherwise invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Wrong email/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The issued token could not be persisted.
    #[error("session storage error: {0}")]
    SessionStore(#[from] SessionStoreError),
}

/// Sign-in form input.
///
/// The password is wrapped in [`SecretString`] so it is redacted from
/// `Debug` output and never logged.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Email address as entered, validated during verification.
    pub email: String,
    /// Password as entered.
    pub password: SecretString,
}

impl Credentials {
    /// Create credentials from form input.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Opaque proof-of-authentication value issued on successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Issue a fresh random token.
    #[must_use]
    pub fn issue() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token and return its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Credential verification collaborator.
pub trait Authenticator {
    /// Verify the credentials and issue a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidEmail`] or [`AuthError::WeakPassword`]
    /// for structurally invalid input, and
    /// [`AuthError::InvalidCredentials`] when the pair does not verify.
    fn verify(&self, credentials: &Credentials) -> Result<AuthToken, AuthError>;
}

/// Validate sign-in form input before any credential check.
///
/// Mirrors the storefront form rules: structurally valid email, password of
/// at least [`MIN_PASSWORD_LENGTH`] characters.
///
/// # Errors
///
/// Returns [`AuthError::InvalidEmail`] or [`AuthError::WeakPassword`].
pub fn validate_credentials(credentials: &Credentials) -> Result<Email, AuthError> {
    let email = Email::parse(&credentials.email)?;
    if credentials.password.expose_secret().len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(email)
}

/// Authenticator accepting one configured email/password pair.
pub struct DemoAuthenticator {
    email: String,
    password: SecretString,
}

impl DemoAuthenticator {
    /// Create a demo authenticator for the given account.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

impl std::fmt::Debug for DemoAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoAuthenticator")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Authenticator for DemoAuthenticator {
    fn verify(&self, credentials: &Credentials) -> Result<AuthToken, AuthError> {
        let email = validate_credentials(credentials)?;

        if email.as_str() != self.email
            || credentials.password.expose_secret() != self.password.expose_secret()
        {
            tracing::warn!(email = %credentials.email, "sign-in rejected");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(AuthToken::issue())
    }
}
