//! # Filesystem-backed token store
//!
//! [`FileStore`] is a [`TokenStore`] implementation for native builds. All keys
//! live in one small TOML table so the session survives process restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session.toml       # token = "...", refreshToken = "..."
//! ```
//!
//! Use [`FileStore::default_dir`] for a platform-appropriate base
//! (`dirs::data_dir()/sitemanager`).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::tokens::TokenStore;

const FILE_NAME: &str = "session.toml";

/// Filesystem-backed TokenStore for native persistence.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serialises read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(FILE_NAME),
            lock: Mutex::new(()),
        }
    }

    /// `<data_dir>/sitemanager`, or `./sitemanager` when the platform has none.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sitemanager")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        match toml::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Ignoring unreadable token file {}: {}", self.path.display(), e);
                BTreeMap::new()
            }
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) {
        if entries.is_empty() {
            let _ = std::fs::remove_file(&self.path);
            return;
        }
        let content = match toml::to_string(entries) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("Failed to serialise token file: {}", e);
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&self.path, content) {
            tracing::error!("Failed to write token file {}: {}", self.path.display(), e);
        }
    }

    fn update(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) {
        let _guard = self.lock.lock();
        let mut entries = self.read_all();
        f(&mut entries);
        self.write_all(&entries);
    }
}

impl TokenStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.lock();
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        });
    }

    fn remove(&self, key: &str) {
        self.update(|entries| {
            entries.remove(key);
        });
    }
}
