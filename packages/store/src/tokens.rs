//! # Session tokens and the `TokenStore` trait
//!
//! The client keeps exactly two opaque strings between page loads: the access
//! token under [`TOKEN_KEY`] and the refresh token under [`REFRESH_TOKEN_KEY`].
//! Nothing else about the session is persisted; the user profile is always
//! re-fetched from the backend on startup.
//!
//! [`TokenStore`] is a small key/value interface modelled on the browser's
//! `localStorage`. Implementations live in sibling modules
//! ([`crate::memory`], [`crate::file_store`], `crate::local_storage`) and must
//! never fail loudly: a broken backend degrades to "no session".

use std::sync::Arc;

/// Storage key of the access token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// The token pair handed out by the backend on login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Persistent key/value storage for session tokens.
///
/// Writes are infallible from the caller's point of view. Implementations log
/// and drop storage errors.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// The persisted access token, if any.
    fn access_token(&self) -> Option<String> {
        self.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Both tokens, if an access token is present.
    ///
    /// A missing refresh token is reported as an empty string.
    fn load_session(&self) -> Option<Session> {
        let access_token = self.access_token()?;
        let refresh_token = self.get(REFRESH_TOKEN_KEY).unwrap_or_default();
        Some(Session {
            access_token,
            refresh_token,
        })
    }

    fn save_session(&self, session: &Session) {
        self.set(TOKEN_KEY, &session.access_token);
        self.set(REFRESH_TOKEN_KEY, &session.refresh_token);
    }

    /// Remove both tokens. Returns whether an access token was present.
    fn clear_session(&self) -> bool {
        let had_token = self.access_token().is_some();
        self.remove(TOKEN_KEY);
        self.remove(REFRESH_TOKEN_KEY);
        had_token
    }
}

/// A token store shared between the HTTP client and the session manager.
pub type SharedTokenStore = Arc<dyn TokenStore>;
