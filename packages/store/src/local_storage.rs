//! # Browser `localStorage` token store
//!
//! [`LocalStorageStore`] is the [`TokenStore`] implementation used on the **web
//! platform**. Tokens are kept under their plain key names (`token`,
//! `refreshToken`) in `window.localStorage`, so they survive page reloads and
//! stay readable by any other code on the origin that expects those keys.
//!
//! ## Error handling
//!
//! Every method swallows errors. A missing window, disabled storage or an
//! exceeded quota degrade to "no session" rather than crashing the UI.

use web_sys::Storage;

use crate::tokens::TokenStore;

/// `window.localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    // Looked up per call: `Storage` is a JS handle and not `Send`.
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, {} not persisted", key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected write of {}", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
