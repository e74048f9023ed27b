//! Directory-backed object store.
//!
//! Lays buckets out as sub-directories of a root and keys as relative
//! paths inside them, the way a mounted bucket looks on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::error::StoreError;
use super::{ObjectStore, validate_bucket, validate_key};

/// Object store rooted at a local directory.
#[derive(Debug, Clone)]
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn bucket_dir(&self, bucket: &str) -> Result<PathBuf, StoreError> {
        validate_bucket(bucket)?;
        Ok(self.root.join(bucket))
    }

    fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        let mut path = self.bucket_dir(bucket)?;
        path.extend(key.split('/'));
        Ok(path)
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn list(&self, bucket: &str, prefix: &str) -> Result<Vec<String>, StoreError> {
        let bucket_dir = self.bucket_dir(bucket)?;
        if !tokio::fs::try_exists(&bucket_dir).await? {
            return Err(StoreError::BucketNotFound(bucket.to_string()));
        }

        let mut keys = Vec::new();
        let mut pending: Vec<(PathBuf, String)> = vec![(bucket_dir, String::new())];

        while let Some((dir, dir_key)) = pending.pop() {
            let mut entries = tokio::fs::read_dir(&dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                    debug!(path = ?entry.path(), "Ignoring non UTF-8 file name");
                    continue;
                };
                let key = if dir_key.is_empty() {
                    name
                } else {
                    format!("{dir_key}/{name}")
                };

                let file_type = entry.file_type().await?;
                if file_type.is_dir() {
                    pending.push((entry.path(), key));
                } else if file_type.is_file() && key.starts_with(prefix) {
                    keys.push(key);
                }
            }
        }

        keys.sort_unstable();
        Ok(keys)
    }

    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.object_path(bucket, key)?;
        tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::ObjectNotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            },
            _ => StoreError::Io(e),
        })
    }

    async fn put(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), StoreError> {
        let path = self.object_path(bucket, key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, body).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> (tempfile::TempDir, FsObjectStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FsObjectStore::new(dir.path());
        for key in [
            "2023/6/25/0800.json",
            "2023/6/26/0800.json",
            "2023/12/01/0800.json",
            "2024/6/01/0800.json",
        ] {
            store.put("src", key, key.as_bytes().to_vec()).await.unwrap();
        }
        (dir, store)
    }

    #[tokio::test]
    async fn put_then_get() {
        let (_dir, store) = seeded().await;
        let body = store.get("src", "2023/6/25/0800.json").await.unwrap();
        assert_eq!(body, b"2023/6/25/0800.json");
    }

    #[tokio::test]
    async fn put_replaces() {
        let (_dir, store) = seeded().await;
        store
            .put("src", "2023/6/25/0800.json", b"new".to_vec())
            .await
            .unwrap();
        assert_eq!(store.get("src", "2023/6/25/0800.json").await.unwrap(), b"new");
    }

    #[tokio::test]
    async fn list_by_string_prefix() {
        let (_dir, store) = seeded().await;

        let keys = store.list("src", "2023/6").await.unwrap();
        assert_eq!(keys, vec!["2023/6/25/0800.json", "2023/6/26/0800.json"]);

        let keys = store.list("src", "2023/1").await.unwrap();
        assert_eq!(keys, vec!["2023/12/01/0800.json"]);

        let keys = store.list("src", "").await.unwrap();
        assert_eq!(keys.len(), 4);

        assert!(store.list("src", "2025").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_missing_bucket() {
        let (_dir, store) = seeded().await;
        let err = store.list("nope", "").await.unwrap_err();
        assert!(matches!(err, StoreError::BucketNotFound(b) if b == "nope"));
    }

    #[tokio::test]
    async fn get_missing_object() {
        let (_dir, store) = seeded().await;
        let err = store.get("src", "2023/6/27/0800.json").await.unwrap_err();
        assert!(matches!(err, StoreError::ObjectNotFound { .. }));
    }

    #[tokio::test]
    async fn rejects_escaping_keys() {
        let (_dir, store) = seeded().await;
        let err = store
            .put("src", "../outside.json", Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey { .. }));

        let err = store.get("../src", "2023/6/25/0800.json").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidBucket(_)));
    }

    #[tokio::test]
    async fn objects_land_under_bucket_directory() {
        let (dir, store) = seeded().await;
        store.put("dst", "2023/6/a.json", b"x".to_vec()).await.unwrap();
        let on_disk = std::fs::read(dir.path().join("dst/2023/6/a.json")).unwrap();
        assert_eq!(on_disk, b"x");
    }
}
