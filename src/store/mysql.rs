// src/store/mysql.rs
//! Self-hosted backend over the tables in `schema.sql`.
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, MySql, MySqlPool, QueryBuilder, query, query_as};

use super::{RecordStore, StoreError};
use crate::models::ImageSlots;
use crate::models::kegiatan::{CardRatio, Kegiatan, KegiatanPayload};
use crate::models::pengurus::{EntryKind, Pengurus, PengurusPayload, RoleType};
use crate::models::struktur_jabatan::{JabatanPayload, StrukturJabatan};

const PENGURUS_COLUMNS: &str = "id, nama, ttl, jabatan_pengurus, asal_pikr, tlpn, email, instagram, \
     image_url, image_url_1, image_url_2, image_url_3, jabatan_id, periode, role_type, entry_kind";

const KEGIATAN_COLUMNS: &str =
    "id, judul, deskripsi, tanggal, image_url_1, image_url_2, image_url_3, created_at, card_ratio";

pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlStore { pool }
    }

    async fn find_jabatan(&self, id: i64) -> Result<StrukturJabatan, StoreError> {
        query_as::<_, StrukturJabatan>(
            "SELECT id, nama_jabatan, urutan FROM struktur_jabatan WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn find_pengurus(&self, id: i64) -> Result<Pengurus, StoreError> {
        let sql = format!("SELECT {} FROM pengurus WHERE id = ?", PENGURUS_COLUMNS);
        query_as::<_, PengurusRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Pengurus::from)
            .ok_or(StoreError::NotFound)
    }

    async fn find_kegiatan(&self, id: i64) -> Result<Option<Kegiatan>, StoreError> {
        let sql = format!("SELECT {} FROM kegiatan WHERE id = ?", KEGIATAN_COLUMNS);
        let row = query_as::<_, KegiatanRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Kegiatan::from))
    }

    async fn delete_in(&self, table: &str, ids: &[i64]) -> Result<u64, StoreError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let mut qb: QueryBuilder<MySql> = QueryBuilder::new(format!("DELETE FROM {} WHERE id IN (", table));
        let mut separated = qb.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");
        let result = qb.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

#[derive(FromRow)]
struct PengurusRow {
    id: i64,
    nama: String,
    ttl: Option<String>,
    jabatan_pengurus: Option<String>,
    asal_pikr: Option<String>,
    tlpn: Option<String>,
    email: Option<String>,
    instagram: Option<String>,
    image_url: Option<String>,
    image_url_1: Option<String>,
    image_url_2: Option<String>,
    image_url_3: Option<String>,
    jabatan_id: i64,
    periode: String,
    role_type: Option<String>,
    entry_kind: Option<String>,
}

impl From<PengurusRow> for Pengurus {
    fn from(row: PengurusRow) -> Self {
        Pengurus {
            id: row.id,
            nama: row.nama,
            ttl: row.ttl,
            jabatan_pengurus: row.jabatan_pengurus,
            asal_pikr: row.asal_pikr,
            tlpn: row.tlpn,
            email: row.email,
            instagram: row.instagram,
            image_url: row.image_url,
            images: ImageSlots {
                image_url_1: row.image_url_1,
                image_url_2: row.image_url_2,
                image_url_3: row.image_url_3,
            },
            jabatan_id: row.jabatan_id,
            periode: row.periode,
            role_type: row.role_type.as_deref().and_then(RoleType::parse),
            entry_kind: row.entry_kind.as_deref().and_then(EntryKind::parse),
        }
    }
}

#[derive(FromRow)]
struct KegiatanRow {
    id: i64,
    judul: String,
    deskripsi: Option<String>,
    tanggal: Option<NaiveDate>,
    image_url_1: Option<String>,
    image_url_2: Option<String>,
    image_url_3: Option<String>,
    created_at: Option<DateTime<Utc>>,
    card_ratio: Option<String>,
}

impl From<KegiatanRow> for Kegiatan {
    fn from(row: KegiatanRow) -> Self {
        Kegiatan {
            id: row.id,
            judul: row.judul,
            deskripsi: row.deskripsi,
            tanggal: row.tanggal,
            images: ImageSlots {
                image_url_1: row.image_url_1,
                image_url_2: row.image_url_2,
                image_url_3: row.image_url_3,
            },
            created_at: row.created_at,
            card_ratio: row.card_ratio.as_deref().and_then(CardRatio::parse),
        }
    }
}

fn push_images(qb: &mut QueryBuilder<'_, MySql>, images: &ImageSlots) {
    qb.push(", image_url_1 = ")
        .push_bind(images.image_url_1.clone())
        .push(", image_url_2 = ")
        .push_bind(images.image_url_2.clone())
        .push(", image_url_3 = ")
        .push_bind(images.image_url_3.clone());
}

#[async_trait]
impl RecordStore for MySqlStore {
    async fn list_jabatan(&self) -> Result<Vec<StrukturJabatan>, StoreError> {
        let rows = query_as::<_, StrukturJabatan>(
            "SELECT id, nama_jabatan, urutan FROM struktur_jabatan ORDER BY urutan ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_jabatan(&self, payload: &JabatanPayload) -> Result<StrukturJabatan, StoreError> {
        let result = query("INSERT INTO struktur_jabatan (nama_jabatan, urutan) VALUES (?, ?)")
            .bind(&payload.nama_jabatan)
            .bind(payload.urutan)
            .execute(&self.pool)
            .await?;
        self.find_jabatan(result.last_insert_id() as i64).await
    }

    async fn update_jabatan(
        &self,
        id: i64,
        payload: &JabatanPayload,
    ) -> Result<StrukturJabatan, StoreError> {
        query("UPDATE struktur_jabatan SET nama_jabatan = ?, urutan = ? WHERE id = ?")
            .bind(&payload.nama_jabatan)
            .bind(payload.urutan)
            .bind(id)
            .execute(&self.pool)
            .await?;
        self.find_jabatan(id).await
    }

    async fn delete_jabatan(&self, id: i64) -> Result<u64, StoreError> {
        self.delete_in("struktur_jabatan", &[id]).await
    }

    async fn list_pengurus(&self) -> Result<Vec<Pengurus>, StoreError> {
        let sql = format!("SELECT {} FROM pengurus ORDER BY periode DESC, id ASC", PENGURUS_COLUMNS);
        let rows = query_as::<_, PengurusRow>(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Pengurus::from).collect())
    }

    async fn insert_pengurus(&self, payload: &PengurusPayload) -> Result<Pengurus, StoreError> {
        let images = payload.images.clone().unwrap_or_default();
        let c = &payload.contact;
        let result = query(
            "INSERT INTO pengurus (nama, ttl, jabatan_pengurus, asal_pikr, tlpn, email, instagram, \
             image_url_1, image_url_2, image_url_3, jabatan_id, periode, role_type, entry_kind) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&payload.nama)
        .bind(&c.ttl)
        .bind(&c.jabatan_pengurus)
        .bind(&c.asal_pikr)
        .bind(&c.tlpn)
        .bind(&c.email)
        .bind(&c.instagram)
        .bind(images.image_url_1)
        .bind(images.image_url_2)
        .bind(images.image_url_3)
        .bind(payload.jabatan_id)
        .bind(&payload.periode)
        .bind(payload.role_type.as_str())
        .bind(payload.entry_kind.as_str())
        .execute(&self.pool)
        .await?;
        self.find_pengurus(result.last_insert_id() as i64).await
    }

    async fn update_pengurus(
        &self,
        id: i64,
        payload: &PengurusPayload,
    ) -> Result<Pengurus, StoreError> {
        let c = &payload.contact;
        let mut qb: QueryBuilder<MySql> = QueryBuilder::new("UPDATE pengurus SET nama = ");
        qb.push_bind(payload.nama.clone())
            .push(", ttl = ")
            .push_bind(c.ttl.clone())
            .push(", jabatan_pengurus = ")
            .push_bind(c.jabatan_pengurus.clone())
            .push(", asal_pikr = ")
            .push_bind(c.asal_pikr.clone())
            .push(", tlpn = ")
            .push_bind(c.tlpn.clone())
            .push(", email = ")
            .push_bind(c.email.clone())
            .push(", instagram = ")
            .push_bind(c.instagram.clone())
            .push(", jabatan_id = ")
            .push_bind(payload.jabatan_id)
            .push(", periode = ")
            .push_bind(payload.periode.clone())
            .push(", role_type = ")
            .push_bind(payload.role_type.as_str())
            .push(", entry_kind = ")
            .push_bind(payload.entry_kind.as_str());
        if let Some(images) = &payload.images {
            push_images(&mut qb, images);
        }
        qb.push(" WHERE id = ").push_bind(id);
        qb.build().execute(&self.pool).await?;
        self.find_pengurus(id).await
    }

    async fn delete_pengurus(&self, ids: &[i64]) -> Result<u64, StoreError> {
        self.delete_in("pengurus", ids).await
    }

    async fn list_kegiatan(&self, limit: Option<usize>) -> Result<Vec<Kegiatan>, StoreError> {
        let mut sql = format!(
            "SELECT {} FROM kegiatan ORDER BY created_at DESC, id DESC",
            KEGIATAN_COLUMNS
        );
        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }
        let rows = query_as::<_, KegiatanRow>(&sql).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Kegiatan::from).collect())
    }

    async fn get_kegiatan(&self, id: i64) -> Result<Option<Kegiatan>, StoreError> {
        self.find_kegiatan(id).await
    }

    async fn insert_kegiatan(&self, payload: &KegiatanPayload) -> Result<Kegiatan, StoreError> {
        let images = payload.images.clone().unwrap_or_default();
        let result = query(
            "INSERT INTO kegiatan (judul, deskripsi, tanggal, image_url_1, image_url_2, image_url_3, card_ratio) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&payload.judul)
        .bind(&payload.deskripsi)
        .bind(payload.tanggal)
        .bind(images.image_url_1)
        .bind(images.image_url_2)
        .bind(images.image_url_3)
        .bind(payload.card_ratio.as_str())
        .execute(&self.pool)
        .await?;
        self.find_kegiatan(result.last_insert_id() as i64)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn update_kegiatan(
        &self,
        id: i64,
        payload: &KegiatanPayload,
    ) -> Result<Kegiatan, StoreError> {
        let mut qb: QueryBuilder<MySql> = QueryBuilder::new("UPDATE kegiatan SET judul = ");
        qb.push_bind(payload.judul.clone())
            .push(", deskripsi = ")
            .push_bind(payload.deskripsi.clone())
            .push(", tanggal = ")
            .push_bind(payload.tanggal)
            .push(", card_ratio = ")
            .push_bind(payload.card_ratio.as_str());
        if let Some(images) = &payload.images {
            push_images(&mut qb, images);
        }
        qb.push(" WHERE id = ").push_bind(id);
        qb.build().execute(&self.pool).await?;
        self.find_kegiatan(id).await?.ok_or(StoreError::NotFound)
    }

    async fn delete_kegiatan(&self, ids: &[i64]) -> Result<u64, StoreError> {
        self.delete_in("kegiatan", ids).await
    }
}
