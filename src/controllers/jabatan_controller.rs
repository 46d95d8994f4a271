use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::auth;
use crate::error::AppError;
use crate::models::struktur_jabatan::JabatanForm;
use crate::organization::filter::{filter_jabatan, member_count};
use crate::utils::{ConfirmQuery, require_confirmation};

#[derive(Debug, Deserialize)]
pub struct JabatanQuery {
    pub q: Option<String>,
}

#[get("/api/adminpanel/jabatan")]
pub async fn get_jabatan(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<JabatanQuery>,
) -> Result<HttpResponse, AppError> {
    auth::require_admin(&req, &state.config.jwt_secret)?;

    let jabatan = state.store.list_jabatan().await?;
    let pengurus = state.store.list_pengurus().await?;
    let rows = filter_jabatan(&jabatan, &pengurus, query.q.as_deref());
    Ok(HttpResponse::Ok().json(json!({ "data": rows, "total": rows.len() })))
}

#[post("/api/adminpanel/jabatan")]
pub async fn create_jabatan(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<JabatanForm>,
) -> Result<HttpResponse, AppError> {
    auth::require_admin(&req, &state.config.jwt_secret)?;
    let payload = body.into_inner().into_payload()?;

    let saved = state.store.insert_jabatan(&payload).await?;
    log::info!("Jabatan baru: {} ({})", saved.nama_jabatan, saved.urutan);
    Ok(HttpResponse::Ok().json(json!({ "message": "Jabatan berhasil ditambahkan!", "data": saved })))
}

#[put("/api/adminpanel/jabatan/{id}")]
pub async fn update_jabatan(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<JabatanForm>,
) -> Result<HttpResponse, AppError> {
    auth::require_admin(&req, &state.config.jwt_secret)?;
    let payload = body.into_inner().into_payload()?;

    let saved = state.store.update_jabatan(path.into_inner(), &payload).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Jabatan berhasil diperbarui!", "data": saved })))
}

#[delete("/api/adminpanel/jabatan/{id}")]
pub async fn delete_jabatan(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<ConfirmQuery>,
) -> Result<HttpResponse, AppError> {
    auth::require_admin(&req, &state.config.jwt_secret)?;
    require_confirmation(query.confirm)?;
    let id = path.into_inner();

    let pengurus = state.store.list_pengurus().await?;
    let used_by = member_count(&pengurus, id);
    if used_by > 0 {
        return Err(AppError::InUse(format!(
            "Jabatan masih digunakan oleh {} pengurus dan tidak dapat dihapus",
            used_by
        )));
    }

    if state.store.delete_jabatan(id).await? == 0 {
        return Err(AppError::NotFound("Jabatan tidak ditemukan".into()));
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Jabatan berhasil dihapus!" })))
}
