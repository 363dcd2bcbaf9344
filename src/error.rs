use crate::catalog::CatalogError;
use crate::storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type VocabResult<T> = Result<T, VocabError>;
