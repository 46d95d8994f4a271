use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use super::AppState;
use super::image_optimizer::{accepted_images, upload_images};
use crate::auth;
use crate::error::AppError;
use crate::models::ImageSlots;
use crate::models::kegiatan::{CardRatio, KegiatanPayload};
use crate::utils::{BulkDeleteRequest, ConfirmQuery, MultipartForm, UploadedFile, require_confirmation};

const IMAGE_FIELDS: [&str; 2] = ["images", "images[]"];

#[derive(Debug, Deserialize)]
pub struct KegiatanQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

fn parse_form<'f>(form: &'f MultipartForm) -> Result<(KegiatanPayload, Vec<&'f UploadedFile>), AppError> {
    let judul = form.text("judul").unwrap_or("").to_string();
    if judul.is_empty() {
        return Err(AppError::validation("Judul wajib diisi"));
    }

    // plain text is stored as typed; only markup goes through ammonia
    let deskripsi = form
        .text("deskripsi")
        .map(|d| {
            if d.contains('<') {
                ammonia::clean(d).trim().to_string()
            } else {
                d.to_string()
            }
        })
        .filter(|d| !d.is_empty());

    let tanggal = form
        .text("tanggal")
        .map(|t| {
            NaiveDate::parse_from_str(t, "%Y-%m-%d")
                .map_err(|_| AppError::validation("Format tanggal harus YYYY-MM-DD"))
        })
        .transpose()?;

    let card_ratio = match form.text("card_ratio") {
        None => CardRatio::default(),
        Some(raw) => CardRatio::parse(raw).ok_or_else(|| {
            AppError::validation("Rasio kartu harus landscape, insta_4_5, atau poster_2_3")
        })?,
    };

    let images = accepted_images(form.files_named(&IMAGE_FIELDS))?;
    if images.len() > ImageSlots::MAX {
        return Err(AppError::validation("Maksimal 3 gambar untuk kegiatan"));
    }

    let payload = KegiatanPayload {
        judul,
        deskripsi,
        tanggal,
        card_ratio,
        images: None,
    };
    payload.validate()?;
    Ok((payload, images))
}

async fn save(
    state: &AppState,
    id: Option<i64>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let form = MultipartForm::read(payload).await?;
    let (mut payload, uploads) = parse_form(&form)?;

    let urls = upload_images(
        state.storage.as_ref(),
        &uploads,
        "kegiatan",
        state.config.image,
    )
    .await?;
    if !urls.is_empty() {
        payload.images = Some(ImageSlots::from_urls(urls));
    } else if id.is_none() {
        payload.images = Some(ImageSlots::default());
    }

    let (saved, message) = match id {
        None => (
            state.store.insert_kegiatan(&payload).await?,
            "Kegiatan berhasil ditambahkan!",
        ),
        Some(id) => (
            state.store.update_kegiatan(id, &payload).await?,
            "Kegiatan berhasil diperbarui!",
        ),
    };
    Ok(HttpResponse::Ok().json(json!({ "message": message, "data": saved })))
}

#[get("/api/kegiatan")]
pub async fn get_kegiatan_list(
    state: web::Data<AppState>,
    query: web::Query<KegiatanQuery>,
) -> Result<HttpResponse, AppError> {
    let needle = query
        .q
        .as_deref()
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    let data = match needle {
        None => state.store.list_kegiatan(query.limit).await?,
        Some(needle) => {
            let mut rows: Vec<_> = state
                .store
                .list_kegiatan(None)
                .await?
                .into_iter()
                .filter(|k| k.matches(&needle))
                .collect();
            if let Some(limit) = query.limit {
                rows.truncate(limit);
            }
            rows
        }
    };
    Ok(HttpResponse::Ok().json(json!({ "data": data, "total": data.len() })))
}

#[get("/api/kegiatan/{id}")]
pub async fn get_kegiatan_by_id(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let kegiatan = state
        .store
        .get_kegiatan(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("Kegiatan tidak ditemukan".into()))?;
    Ok(HttpResponse::Ok().json(json!({ "data": kegiatan })))
}

#[post("/api/adminpanel/kegiatan")]
pub async fn create_kegiatan(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    auth::require_admin(&req, &state.config.jwt_secret)?;
    save(&state, None, payload).await
}

#[put("/api/adminpanel/kegiatan/{id}")]
pub async fn update_kegiatan(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    auth::require_admin(&req, &state.config.jwt_secret)?;
    save(&state, Some(path.into_inner()), payload).await
}

#[delete("/api/adminpanel/kegiatan/{id}")]
pub async fn delete_kegiatan(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<ConfirmQuery>,
) -> Result<HttpResponse, AppError> {
    auth::require_admin(&req, &state.config.jwt_secret)?;
    require_confirmation(query.confirm)?;

    if state.store.delete_kegiatan(&[path.into_inner()]).await? == 0 {
        return Err(AppError::NotFound("Kegiatan tidak ditemukan".into()));
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Kegiatan berhasil dihapus!" })))
}

#[post("/api/adminpanel/kegiatan/bulk-delete")]
pub async fn bulk_delete_kegiatan(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<BulkDeleteRequest>,
) -> Result<HttpResponse, AppError> {
    auth::require_admin(&req, &state.config.jwt_secret)?;
    let ids = body.into_inner().into_ids()?;

    let deleted = state.store.delete_kegiatan(&ids).await?;
    log::info!("Bulk delete kegiatan: {} dari {} dipilih", deleted, ids.len());
    Ok(HttpResponse::Ok().json(json!({
        "message": format!("{} kegiatan berhasil dihapus!", deleted),
        "deleted": deleted,
    })))
}
