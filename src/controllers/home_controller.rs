use actix_web::{HttpResponse, get, web};
use serde_json::json;

use super::AppState;
use crate::content::{self, FAQ_SECTIONS, HERO_SLIDES, QUICK_LINKS, SITE_NAME};
use crate::error::AppError;

pub const KEGIATAN_PREVIEW: usize = 6;

#[get("/api/home")]
pub async fn get_home(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let kegiatan = state
        .store
        .list_kegiatan(Some(KEGIATAN_PREVIEW))
        .await
        .unwrap_or_else(|e| {
            log::error!("Gagal memuat kegiatan terbaru: {}", e);
            Vec::new()
        });

    Ok(HttpResponse::Ok().json(json!({
        "site_name": SITE_NAME,
        "json_ld": content::json_ld(&state.config.site_url),
        "hero": HERO_SLIDES,
        "quick_links": QUICK_LINKS,
        "faq": FAQ_SECTIONS,
        "kegiatan": kegiatan,
    })))
}

#[get("/api/faq/{topic}")]
pub async fn get_faq(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let section = content::faq_section(&path)
        .ok_or_else(|| AppError::NotFound("Topik FAQ tidak ditemukan".into()))?;
    Ok(HttpResponse::Ok().json(section))
}
