//! Object store error types.

/// Errors from an [`ObjectStore`](super::ObjectStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem or other I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bucket does not exist
    #[error("bucket not found: {0}")]
    BucketNotFound(String),

    /// Object does not exist
    #[error("object not found: {bucket}/{key}")]
    ObjectNotFound { bucket: String, key: String },

    /// Bucket name is not usable
    #[error("invalid bucket name: {0:?}")]
    InvalidBucket(String),

    /// Key is not a safe relative path
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },
}
