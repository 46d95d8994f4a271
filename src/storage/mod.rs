// src/storage/mod.rs
//! Object storage for uploaded images.
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{AppConfig, StorageBackend};

pub mod local;
#[cfg(test)]
pub mod memory;
pub mod supabase;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload gagal: {0}")]
    Api(String),
    #[error("Gagal menghubungi penyimpanan file: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Gagal menulis file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Path file tidak valid: {0}")]
    InvalidPath(String),
    #[error("Konfigurasi penyimpanan file tidak lengkap: {0}")]
    Config(String),
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stores `bytes` at `path`. Existing objects are never overwritten.
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), StorageError>;

    fn public_url(&self, path: &str) -> String;
}

pub fn connect(config: &AppConfig) -> Result<Arc<dyn ObjectStorage>, StorageError> {
    match config.storage_backend {
        StorageBackend::Supabase => {
            let supabase = config
                .supabase
                .as_ref()
                .ok_or_else(|| StorageError::Config("SUPABASE_URL".into()))?;
            log::info!("Object storage: Supabase bucket {}", config.media_bucket);
            Ok(Arc::new(supabase::SupabaseStorage::new(
                supabase,
                &config.media_bucket,
                config.http_timeout,
            )?))
        }
        StorageBackend::Local => {
            log::info!("Object storage: {}", config.upload_dir.display());
            Ok(Arc::new(local::LocalStorage::new(
                config.upload_dir.clone(),
                &config.public_base_url,
            )))
        }
    }
}
