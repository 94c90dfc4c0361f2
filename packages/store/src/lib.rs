//! Client-side persistence of the session token pair.

pub mod tokens;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use tokens::{Session, SharedTokenStore, TokenStore, REFRESH_TOKEN_KEY, TOKEN_KEY};
