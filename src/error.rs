//! Crate-wide error type

use uuid::Uuid;

/// All errors produced by the viewer data stores.
#[derive(Debug, thiserror::Error)]
pub enum ViewerDataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No storage file configured")]
    NoFilename,

    #[error("Refusing to add own avatar {0} to recent people")]
    SelfAdd(Uuid),

    #[error("{0} is a group, not a person")]
    GroupId(Uuid),

    #[error("Material id must be {expected} bytes, got {actual}")]
    MaterialIdLength { expected: usize, actual: usize },

    #[error("Invalid material id: {0}")]
    MaterialIdParse(#[from] uuid::Error),
}

pub type Result<T> = std::result::Result<T, ViewerDataError>;
