// src/store/supabase.rs
//! PostgREST client for the hosted Supabase database.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{RecordStore, StoreError};
use crate::config::SupabaseConfig;
use crate::models::kegiatan::{Kegiatan, KegiatanPayload};
use crate::models::pengurus::{Pengurus, PengurusPayload};
use crate::models::struktur_jabatan::{JabatanPayload, StrukturJabatan};

const JABATAN: &str = "struktur_jabatan";
const PENGURUS: &str = "pengurus";
const KEGIATAN: &str = "kegiatan";

pub struct SupabaseStore {
    client: Client,
    base_url: String,
    service_key: String,
}

impl SupabaseStore {
    pub fn new(config: &SupabaseConfig, timeout: Duration) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(SupabaseStore {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
        })
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/rest/v1/{}", self.base_url, table))
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        order: &str,
        limit: Option<usize>,
    ) -> Result<Vec<T>, StoreError> {
        let mut query = vec![("select", "*".to_string()), ("order", order.to_string())];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        let resp = self.request(Method::GET, table).query(&query).send().await?;
        read_json(resp).await
    }

    async fn select_by_id<T: DeserializeOwned>(
        &self,
        table: &str,
        id: i64,
    ) -> Result<Option<T>, StoreError> {
        let resp = self
            .request(Method::GET, table)
            .query(&[("select", "*".to_string()), ("id", id_filter(&[id]))])
            .send()
            .await?;
        let rows: Vec<T> = read_json(resp).await?;
        Ok(rows.into_iter().next())
    }

    async fn insert<T: DeserializeOwned, P: Serialize + Sync>(
        &self,
        table: &str,
        payload: &P,
    ) -> Result<T, StoreError> {
        let resp = self
            .request(Method::POST, table)
            .header("Prefer", "return=representation")
            .json(payload)
            .send()
            .await?;
        let rows: Vec<T> = read_json(resp).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode(format!("insert ke {} tidak mengembalikan data", table)))
    }

    async fn update<T: DeserializeOwned, P: Serialize + Sync>(
        &self,
        table: &str,
        id: i64,
        payload: &P,
    ) -> Result<T, StoreError> {
        let resp = self
            .request(Method::PATCH, table)
            .query(&[("id", id_filter(&[id]))])
            .header("Prefer", "return=representation")
            .json(payload)
            .send()
            .await?;
        let rows: Vec<T> = read_json(resp).await?;
        rows.into_iter().next().ok_or(StoreError::NotFound)
    }

    async fn delete(&self, table: &str, ids: &[i64]) -> Result<u64, StoreError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let resp = self
            .request(Method::DELETE, table)
            .query(&[("id", id_filter(ids))])
            .header("Prefer", "return=representation")
            .send()
            .await?;
        let rows: Vec<Value> = read_json(resp).await?;
        Ok(rows.len() as u64)
    }
}

/// `eq.<id>` for a single id, `in.(a,b,..)` otherwise.
pub(crate) fn id_filter(ids: &[i64]) -> String {
    match ids {
        [one] => format!("eq.{}", one),
        many => format!(
            "in.({})",
            many.iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(",")
        ),
    }
}

/// PostgREST puts a human readable `message` in its error bodies.
pub(crate) fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string())
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, StoreError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = error_message(&body, status);
        log::error!("Supabase {}: {}", status.as_u16(), message);
        return Err(StoreError::Api {
            status: status.as_u16(),
            message,
        });
    }
    resp.json::<T>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

#[async_trait]
impl RecordStore for SupabaseStore {
    async fn list_jabatan(&self) -> Result<Vec<StrukturJabatan>, StoreError> {
        self.select(JABATAN, "urutan.asc", None).await
    }

    async fn insert_jabatan(&self, payload: &JabatanPayload) -> Result<StrukturJabatan, StoreError> {
        self.insert(JABATAN, payload).await
    }

    async fn update_jabatan(
        &self,
        id: i64,
        payload: &JabatanPayload,
    ) -> Result<StrukturJabatan, StoreError> {
        self.update(JABATAN, id, payload).await
    }

    async fn delete_jabatan(&self, id: i64) -> Result<u64, StoreError> {
        self.delete(JABATAN, &[id]).await
    }

    async fn list_pengurus(&self) -> Result<Vec<Pengurus>, StoreError> {
        self.select(PENGURUS, "periode.desc,id.asc", None).await
    }

    async fn insert_pengurus(&self, payload: &PengurusPayload) -> Result<Pengurus, StoreError> {
        self.insert(PENGURUS, payload).await
    }

    async fn update_pengurus(
        &self,
        id: i64,
        payload: &PengurusPayload,
    ) -> Result<Pengurus, StoreError> {
        self.update(PENGURUS, id, payload).await
    }

    async fn delete_pengurus(&self, ids: &[i64]) -> Result<u64, StoreError> {
        self.delete(PENGURUS, ids).await
    }

    async fn list_kegiatan(&self, limit: Option<usize>) -> Result<Vec<Kegiatan>, StoreError> {
        self.select(KEGIATAN, "created_at.desc", limit).await
    }

    async fn get_kegiatan(&self, id: i64) -> Result<Option<Kegiatan>, StoreError> {
        self.select_by_id(KEGIATAN, id).await
    }

    async fn insert_kegiatan(&self, payload: &KegiatanPayload) -> Result<Kegiatan, StoreError> {
        self.insert(KEGIATAN, payload).await
    }

    async fn update_kegiatan(
        &self,
        id: i64,
        payload: &KegiatanPayload,
    ) -> Result<Kegiatan, StoreError> {
        self.update(KEGIATAN, id, payload).await
    }

    async fn delete_kegiatan(&self, ids: &[i64]) -> Result<u64, StoreError> {
        self.delete(KEGIATAN, ids).await
    }
}
