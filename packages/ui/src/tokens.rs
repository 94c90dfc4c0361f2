//! Platform token store and client settings.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage`, settings baked in at build time
//! - **Desktop / Mobile** (native): `session.toml` and `sitemanager.toml` under the user data dir

use std::sync::Arc;

use api::ClientConfig;
use store::SharedTokenStore;

/// Create the token store for the current platform.
pub fn make_token_store() -> SharedTokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Arc::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(store::FileStore::new(store::FileStore::default_dir()))
    }
}

/// Backend settings for the current platform.
pub fn load_client_config() -> ClientConfig {
    #[cfg(target_arch = "wasm32")]
    {
        ClientConfig::from_build_env()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        ClientConfig::load(&store::FileStore::default_dir())
    }
}
