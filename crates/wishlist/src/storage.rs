//! Durable local key-value storage backends for snapshots.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Durable local key-value store for serialized snapshots.
///
/// Models a browser-profile-scoped store: one string value per key, reads
/// and writes are synchronous, and a missing key is not an error. Failures
/// here are infrastructure failures; content-level problems (a value that
/// does not parse) are the caller's concern.
pub trait SnapshotStorage: Send {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// In-memory storage. Used in tests and for sessions without durability.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, e.g. to simulate a prior session in tests.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.values.insert(key.to_string(), value.to_string());
        storage
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage: one `<key>.json` file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage under the per-user app data directory:
    /// `{app_data_dir}/vitrine/`.
    pub fn in_app_data() -> anyhow::Result<Self> {
        let base = dirs::data_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut h| {
                    h.push(".local");
                    h.push("share");
                    h
                })
            })
            .context("failed to resolve a per-user app data directory")?;

        let mut dir = base;
        dir.push("vitrine");
        Ok(Self::new(dir))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStorage for FileStorage {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.value_path(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read snapshot at {path:?}"))
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create storage directory at {:?}", self.dir))?;

        let path = self.value_path(key);
        std::fs::write(&path, value)
            .with_context(|| format!("failed to write snapshot at {path:?}"))
    }
}
