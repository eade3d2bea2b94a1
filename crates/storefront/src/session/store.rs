//! Persisted session token storage.
//!
//! The storefront keeps at most one opaque token; its presence is the sole
//! authentication signal. The store is injected into [`SessionGuard`] so the
//! persistence mechanism stays a collaborator with a defined lifecycle
//! (load at startup, write on sign-in, clear on sign-out) rather than
//! ambient global state.
//!
//! [`SessionGuard`]: crate::session::SessionGuard

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the persisted token store.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// Reading or writing the backing storage failed.
    #[error("session storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// The persisted content could not be decoded.
    #[error("corrupt session storage: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Key-value store surviving "page reloads", holding at most one token.
pub trait TokenStore {
    /// Load the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or decoded.
    fn load(&self) -> Result<Option<String>, SessionStoreError>;

    /// Persist the token, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&mut self, token: &str) -> Result<(), SessionStoreError>;

    /// Remove the persisted token.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn clear(&mut self) -> Result<(), SessionStoreError>;
}

/// Ephemeral store for tests and sessions without persistence.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenStore {
    token: Option<String>,
}

impl InMemoryTokenStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { token: None }
    }

    /// Create a store pre-seeded with a token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Result<Option<String>, SessionStoreError> {
        Ok(self.token.clone())
    }

    fn save(&mut self, token: &str) -> Result<(), SessionStoreError> {
        self.token = Some(token.to_owned());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionStoreError> {
        self.token = None;
        Ok(())
    }
}

/// On-disk serialized form of the session.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    token: String,
}

/// JSON-file-backed store.
///
/// A missing file means no session; clearing removes the file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is not touched until the first `save`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, SessionStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let session: PersistedSession = serde_json::from_str(&contents)?;
        Ok(Some(session.token))
    }

    fn save(&mut self, token: &str) -> Result<(), SessionStoreError> {
        let session = PersistedSession {
            token: token.to_owned(),
        };
        let json = serde_json::to_string(&session)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
