// src/store/mod.rs
//! Record persistence for `struktur_jabatan`, `pengurus` and `kegiatan`.
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{AppConfig, StoreBackend};
use crate::models::kegiatan::{Kegiatan, KegiatanPayload};
use crate::models::pengurus::{Pengurus, PengurusPayload};
use crate::models::struktur_jabatan::{JabatanPayload, StrukturJabatan};

#[cfg(test)]
pub mod memory;
pub mod mysql;
pub mod supabase;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Rejected by the store; `message` is shown to the admin as is.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Gagal menghubungi server data: {0}")]
    Transport(String),
    #[error("Data tidak ditemukan")]
    NotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("Respons server data tidak valid: {0}")]
    Decode(String),
    #[error("Konfigurasi penyimpanan data tidak lengkap: {0}")]
    Config(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            StoreError::Decode(e.to_string())
        } else {
            StoreError::Transport(e.to_string())
        }
    }
}

/// Table access used by the controllers. Lists come back in display order:
/// positions by `urutan`, members by period newest first (then `id`),
/// activities newest first.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_jabatan(&self) -> Result<Vec<StrukturJabatan>, StoreError>;
    async fn insert_jabatan(&self, payload: &JabatanPayload) -> Result<StrukturJabatan, StoreError>;
    async fn update_jabatan(
        &self,
        id: i64,
        payload: &JabatanPayload,
    ) -> Result<StrukturJabatan, StoreError>;
    async fn delete_jabatan(&self, id: i64) -> Result<u64, StoreError>;

    async fn list_pengurus(&self) -> Result<Vec<Pengurus>, StoreError>;
    async fn insert_pengurus(&self, payload: &PengurusPayload) -> Result<Pengurus, StoreError>;
    async fn update_pengurus(
        &self,
        id: i64,
        payload: &PengurusPayload,
    ) -> Result<Pengurus, StoreError>;
    /// Deletes every row whose id is in `ids`, returning how many went away.
    async fn delete_pengurus(&self, ids: &[i64]) -> Result<u64, StoreError>;

    async fn list_kegiatan(&self, limit: Option<usize>) -> Result<Vec<Kegiatan>, StoreError>;
    async fn get_kegiatan(&self, id: i64) -> Result<Option<Kegiatan>, StoreError>;
    async fn insert_kegiatan(&self, payload: &KegiatanPayload) -> Result<Kegiatan, StoreError>;
    async fn update_kegiatan(
        &self,
        id: i64,
        payload: &KegiatanPayload,
    ) -> Result<Kegiatan, StoreError>;
    async fn delete_kegiatan(&self, ids: &[i64]) -> Result<u64, StoreError>;
}

pub async fn connect(config: &AppConfig) -> Result<Arc<dyn RecordStore>, StoreError> {
    match config.store_backend {
        StoreBackend::Supabase => {
            let supabase = config
                .supabase
                .as_ref()
                .ok_or_else(|| StoreError::Config("SUPABASE_URL".into()))?;
            let store = supabase::SupabaseStore::new(supabase, config.http_timeout)?;
            log::info!("Record store: Supabase ({})", supabase.url);
            Ok(Arc::new(store))
        }
        StoreBackend::MySql => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| StoreError::Config("DATABASE_URL".into()))?;
            let pool = crate::db::establish_connection(url).await?;
            log::info!("Record store: MySQL");
            Ok(Arc::new(mysql::MySqlStore::new(pool)))
        }
    }
}
