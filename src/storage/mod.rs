//! Key-value persistence boundary
//!
//! Every persisted aggregate lives under one well-known key as a JSON
//! document. The concrete backend is chosen by the caller:
//! - [`MemoryStore`] for tests and throwaway sessions
//! - [`JsonFileStore`] for one `<key>.json` file per key on disk

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub const PROGRESS_KEY: &str = "vocab_progress";
pub const REWARD_STATS_KEY: &str = "vocab_reward_stats";
pub const UNLOCKED_BADGES_KEY: &str = "vocab_unlocked_badges";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid key: {0}")]
    InvalidKey(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Synchronous get/set contract over string values.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

/// Reads `key` and deserializes it, falling back to `T::default()` when the
/// key is absent or the stored document cannot be parsed.
pub fn load_json<T, S>(store: &S, key: &str) -> StorageResult<T>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(T::default());
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(err) => {
            tracing::warn!(key, error = %err, "stored value is corrupt, using defaults");
            Ok(T::default())
        }
    }
}

pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> StorageResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
