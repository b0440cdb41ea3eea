//! Durable key-value storage behind the session store.
//!
//! The backend is injectable so the session properties can be tested
//! without touching the filesystem. Production uses [`FileStorage`]
//! (one file per key under the configured state path); tests use
//! [`MemoryStorage`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

/// Plain-string key-value storage surviving process restarts.
///
/// Writes are best-effort: a failing backend must not take the client
/// down, so `set`/`remove` report nothing and implementations log
/// failures instead.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// File-backed storage
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// File-per-key storage under `state_path/session/`.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) the storage directory.
    pub fn new(state_path: &Path) -> std::io::Result<Self> {
        let dir = state_path.join("session");
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::write(self.path(key), value) {
            tracing::warn!(key, error = %e, "session storage write failed");
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(key, error = %e, "session storage remove failed"),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// In-memory storage (tests)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Volatile storage for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStorage {
    map: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.map.write().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.map.write().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path()).unwrap();

        assert_eq!(storage.get("token"), None);
        storage.set("token", "abc123");
        assert_eq!(storage.get("token").as_deref(), Some("abc123"));
        storage.remove("token");
        assert_eq!(storage.get("token"), None);
    }

    #[test]
    fn file_storage_remove_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path()).unwrap();
        storage.remove("never-written");
        storage.remove("never-written");
    }

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::new();
        storage.set("user", r#"{"id":"1"}"#);
        assert_eq!(storage.get("user").as_deref(), Some(r#"{"id":"1"}"#));
        storage.remove("user");
        assert_eq!(storage.get("user"), None);
    }
}
