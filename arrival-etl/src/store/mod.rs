//! Object storage.
//!
//! Source snapshots and translated output both live in buckets of keyed
//! objects. [`ObjectStore`] is the narrow surface the job needs: list by
//! prefix, read, write.

mod error;
mod fs;
mod memory;

pub use error::StoreError;
pub use fs::FsObjectStore;
pub use memory::MemoryObjectStore;

use async_trait::async_trait;

/// A bucketed key/value object store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Keys in `bucket` whose text starts with `prefix`, sorted.
    ///
    /// Matching is on the raw key string, not on path segments: `2023/1`
    /// matches `2023/1/a.json` and `2023/12/a.json` alike.
    async fn list(&self, bucket: &str, prefix: &str) -> Result<Vec<String>, StoreError>;

    /// Read an object's bytes.
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Create or replace an object.
    async fn put(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), StoreError>;
}

/// Check a key is a relative `/`-separated path with no empty, `.` or `..`
/// segments.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let invalid = |reason: &'static str| StoreError::InvalidKey {
        key: key.to_string(),
        reason,
    };

    if key.is_empty() {
        return Err(invalid("key is empty"));
    }
    for segment in key.split('/') {
        match segment {
            "" => return Err(invalid("empty path segment")),
            "." | ".." => return Err(invalid("relative path segment")),
            s if s.contains('\\') || s.contains('\0') => {
                return Err(invalid("forbidden character"));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Check a bucket name is a single non-empty path segment.
pub(crate) fn validate_bucket(bucket: &str) -> Result<(), StoreError> {
    if bucket.is_empty() || bucket == "." || bucket == ".." || bucket.contains(['/', '\\', '\0']) {
        return Err(StoreError::InvalidBucket(bucket.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_keys() {
        assert!(validate_key("2023/6/25/0800.json").is_ok());
        assert!(validate_key("single").is_ok());
        assert!(validate_key("with space/and.dots..json").is_ok());
    }

    #[test]
    fn invalid_keys() {
        assert!(validate_key("").is_err());
        assert!(validate_key("/abs").is_err());
        assert!(validate_key("trailing/").is_err());
        assert!(validate_key("a//b").is_err());
        assert!(validate_key("a/../b").is_err());
        assert!(validate_key("./a").is_err());
        assert!(validate_key("a\\b").is_err());
    }

    #[test]
    fn bucket_names() {
        assert!(validate_bucket("italian-bmt-elastic-bucket").is_ok());
        assert!(validate_bucket("italian_bmt_bucket").is_ok());
        assert!(validate_bucket("").is_err());
        assert!(validate_bucket("..").is_err());
        assert!(validate_bucket("a/b").is_err());
    }
}
