// src/store/memory.rs
//! In-process store for handler tests. Counts write calls so tests can assert
//! that rejected requests never reached the store.
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use super::{RecordStore, StoreError};
use crate::models::kegiatan::{Kegiatan, KegiatanPayload};
use crate::models::pengurus::{Pengurus, PengurusPayload};
use crate::models::struktur_jabatan::{JabatanPayload, StrukturJabatan};

#[derive(Default)]
struct Tables {
    jabatan: Vec<StrukturJabatan>,
    pengurus: Vec<Pengurus>,
    kegiatan: Vec<Kegiatan>,
    next_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    writes: AtomicUsize,
    fail_reads: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            tables: Mutex::new(Tables {
                next_id: 1000,
                ..Tables::default()
            }),
            ..MemoryStore::default()
        }
    }

    pub fn with_jabatan(self, rows: Vec<StrukturJabatan>) -> Self {
        self.tables.lock().unwrap().jabatan = rows;
        self
    }

    pub fn with_pengurus(self, rows: Vec<Pengurus>) -> Self {
        self.tables.lock().unwrap().pengurus = rows;
        self
    }

    pub fn with_kegiatan(self, rows: Vec<Kegiatan>) -> Self {
        self.tables.lock().unwrap().kegiatan = rows;
        self
    }

    /// Makes every list call fail with `message`.
    pub fn failing_reads(self, message: &str) -> Self {
        *self.fail_reads.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn pengurus(&self) -> Vec<Pengurus> {
        self.tables.lock().unwrap().pengurus.clone()
    }

    pub fn jabatan(&self) -> Vec<StrukturJabatan> {
        self.tables.lock().unwrap().jabatan.clone()
    }

    pub fn kegiatan(&self) -> Vec<Kegiatan> {
        self.tables.lock().unwrap().kegiatan.clone()
    }

    fn check_read(&self) -> Result<(), StoreError> {
        match self.fail_reads.lock().unwrap().as_ref() {
            Some(message) => Err(StoreError::Api {
                status: 503,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn write(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.tables.lock().unwrap()
    }
}

fn next_id(tables: &mut Tables) -> i64 {
    tables.next_id += 1;
    tables.next_id
}

fn pengurus_from(id: i64, payload: &PengurusPayload, previous: Option<&Pengurus>) -> Pengurus {
    let c = &payload.contact;
    Pengurus {
        id,
        nama: payload.nama.clone(),
        ttl: c.ttl.clone(),
        jabatan_pengurus: c.jabatan_pengurus.clone(),
        asal_pikr: c.asal_pikr.clone(),
        tlpn: c.tlpn.clone(),
        email: c.email.clone(),
        instagram: c.instagram.clone(),
        image_url: previous.and_then(|p| p.image_url.clone()),
        images: payload
            .images
            .clone()
            .or_else(|| previous.map(|p| p.images.clone()))
            .unwrap_or_default(),
        jabatan_id: payload.jabatan_id,
        periode: payload.periode.clone(),
        role_type: Some(payload.role_type),
        entry_kind: Some(payload.entry_kind),
    }
}

fn kegiatan_from(id: i64, payload: &KegiatanPayload, previous: Option<&Kegiatan>) -> Kegiatan {
    Kegiatan {
        id,
        judul: payload.judul.clone(),
        deskripsi: payload.deskripsi.clone(),
        tanggal: payload.tanggal,
        images: payload
            .images
            .clone()
            .or_else(|| previous.map(|k| k.images.clone()))
            .unwrap_or_default(),
        created_at: previous.and_then(|k| k.created_at).or_else(|| Some(Utc::now())),
        card_ratio: Some(payload.card_ratio),
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_jabatan(&self) -> Result<Vec<StrukturJabatan>, StoreError> {
        self.check_read()?;
        let mut rows = self.jabatan();
        rows.sort_by_key(|j| j.urutan);
        Ok(rows)
    }

    async fn insert_jabatan(&self, payload: &JabatanPayload) -> Result<StrukturJabatan, StoreError> {
        let mut t = self.write();
        let row = StrukturJabatan {
            id: next_id(&mut t),
            nama_jabatan: payload.nama_jabatan.clone(),
            urutan: payload.urutan,
        };
        t.jabatan.push(row.clone());
        Ok(row)
    }

    async fn update_jabatan(
        &self,
        id: i64,
        payload: &JabatanPayload,
    ) -> Result<StrukturJabatan, StoreError> {
        let mut t = self.write();
        let row = t
            .jabatan
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or(StoreError::NotFound)?;
        row.nama_jabatan = payload.nama_jabatan.clone();
        row.urutan = payload.urutan;
        Ok(row.clone())
    }

    async fn delete_jabatan(&self, id: i64) -> Result<u64, StoreError> {
        let mut t = self.write();
        let before = t.jabatan.len();
        t.jabatan.retain(|j| j.id != id);
        Ok((before - t.jabatan.len()) as u64)
    }

    async fn list_pengurus(&self) -> Result<Vec<Pengurus>, StoreError> {
        self.check_read()?;
        let mut rows = self.pengurus();
        rows.sort_by(|a, b| b.periode.cmp(&a.periode).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn insert_pengurus(&self, payload: &PengurusPayload) -> Result<Pengurus, StoreError> {
        let mut t = self.write();
        let id = next_id(&mut t);
        let row = pengurus_from(id, payload, None);
        t.pengurus.push(row.clone());
        Ok(row)
    }

    async fn update_pengurus(
        &self,
        id: i64,
        payload: &PengurusPayload,
    ) -> Result<Pengurus, StoreError> {
        let mut t = self.write();
        let row = t
            .pengurus
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        *row = pengurus_from(id, payload, Some(&*row));
        Ok(row.clone())
    }

    async fn delete_pengurus(&self, ids: &[i64]) -> Result<u64, StoreError> {
        let mut t = self.write();
        let before = t.pengurus.len();
        t.pengurus.retain(|p| !ids.contains(&p.id));
        Ok((before - t.pengurus.len()) as u64)
    }

    async fn list_kegiatan(&self, limit: Option<usize>) -> Result<Vec<Kegiatan>, StoreError> {
        self.check_read()?;
        let mut rows = self.kegiatan();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = limit {
            rows.truncate(limit);
        }
        Ok(rows)
    }

    async fn get_kegiatan(&self, id: i64) -> Result<Option<Kegiatan>, StoreError> {
        self.check_read()?;
        Ok(self.kegiatan().into_iter().find(|k| k.id == id))
    }

    async fn insert_kegiatan(&self, payload: &KegiatanPayload) -> Result<Kegiatan, StoreError> {
        let mut t = self.write();
        let id = next_id(&mut t);
        let row = kegiatan_from(id, payload, None);
        t.kegiatan.push(row.clone());
        Ok(row)
    }

    async fn update_kegiatan(
        &self,
        id: i64,
        payload: &KegiatanPayload,
    ) -> Result<Kegiatan, StoreError> {
        let mut t = self.write();
        let row = t
            .kegiatan
            .iter_mut()
            .find(|k| k.id == id)
            .ok_or(StoreError::NotFound)?;
        *row = kegiatan_from(id, payload, Some(&*row));
        Ok(row.clone())
    }

    async fn delete_kegiatan(&self, ids: &[i64]) -> Result<u64, StoreError> {
        let mut t = self.write();
        let before = t.kegiatan.len();
        t.kegiatan.retain(|k| !ids.contains(&k.id));
        Ok((before - t.kegiatan.len()) as u64)
    }
}
