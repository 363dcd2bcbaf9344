//! Directory-backed store
//!
//! ```text
//! {root}/
//! ├── vocab_progress.json
//! ├── vocab_reward_stats.json
//! └── vocab_unlocked_badges.json
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{validate_key, KeyValueStore, StorageResult};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Opens (and creates if needed) the store directory.
    pub fn open<P: AsRef<Path>>(root: P) -> StorageResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        match fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        let path = self.key_path(key);
        let tmp = self.root.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(key, bytes = value.len(), "store entry written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
