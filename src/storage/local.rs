// src/storage/local.rs
//! Disk-backed storage for self-hosted installs; files are served under `/uploads`.
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::{fs, io::AsyncWriteExt};

use super::{ObjectStorage, StorageError};

pub const PUBLIC_PREFIX: &str = "/uploads";

pub struct LocalStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalStorage {
    pub fn new(root: PathBuf, public_base_url: &str) -> Self {
        LocalStorage {
            root,
            base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Only plain relative paths are accepted.
    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        let rel = Path::new(path);
        let clean = !path.is_empty()
            && rel
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !clean {
            return Err(StorageError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(rel))
    }
}

#[async_trait]
impl ObjectStorage for LocalStorage {
    async fn upload(&self, path: &str, bytes: Vec<u8>, _content_type: &str) -> Result<(), StorageError> {
        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .await?;
        file.write_all(&bytes).await?;
        file.flush().await?;
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}{}/{}", self.base_url, PUBLIC_PREFIX, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn writes_under_root_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().to_path_buf(), "http://localhost:8080/");

        storage
            .upload("pengurus/a.webp", b"RIFF".to_vec(), "image/webp")
            .await
            .unwrap();
        let written = std::fs::read(dir.path().join("pengurus/a.webp")).unwrap();
        assert_eq!(written, b"RIFF");

        let again = storage
            .upload("pengurus/a.webp", b"x".to_vec(), "image/webp")
            .await;
        assert!(matches!(again, Err(StorageError::Io(_))));
        assert_eq!(
            storage.public_url("pengurus/a.webp"),
            "http://localhost:8080/uploads/pengurus/a.webp"
        );
    }

    #[actix_web::test]
    async fn rejects_escaping_paths() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().to_path_buf(), "http://localhost:8080");

        for bad in ["../x.webp", "/etc/passwd", "a/../../b", ""] {
            let result = storage.upload(bad, vec![1], "image/webp").await;
            assert!(matches!(result, Err(StorageError::InvalidPath(_))), "{}", bad);
        }
    }
}
