use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    /// A record violates a data-model invariant (e.g. a publication without a year).
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// Two records in one store share the same key.
    #[error("Duplicate record key: {0}")]
    DuplicateKey(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The external publication source failed. The existing store is left as it was.
    #[error("Sync failed: {0}")]
    Sync(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl FolioError {
    /// True for data-integrity failures, as opposed to environment failures.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            FolioError::MalformedRecord(_) | FolioError::DuplicateKey(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
