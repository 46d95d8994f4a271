use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use super::AppState;
use super::image_optimizer::{accepted_images, upload_images};
use crate::auth;
use crate::error::AppError;
use crate::export::{self, ExportFormat};
use crate::models::ImageSlots;
use crate::models::pengurus::{Contact, EntryKind, Pengurus, PengurusPayload, RoleType};
use crate::models::struktur_jabatan::StrukturJabatan;
use crate::organization::classify::{JabatanKind, classify, is_core_role};
use crate::organization::composite::{BphRoles, compose_division, form_fields};
use crate::organization::filter::{AdminFilter, filter_admin, period_options};
use crate::organization::hierarchy::build_hierarchy;
use crate::utils::{BulkDeleteRequest, ConfirmQuery, MultipartForm, UploadedFile, require_confirmation};

const IMAGE_FIELDS: [&str; 2] = ["images", "images[]"];
const REQUIRED_MESSAGE: &str = "Nama, Jabatan, dan Periode wajib diisi.";

#[derive(Debug, Serialize)]
struct PengurusItem<'a> {
    #[serde(flatten)]
    pengurus: &'a Pengurus,
    nama_jabatan: Option<&'a str>,
    kind: EntryKind,
    /// Core roles have no Instagram field in the admin form.
    core_role: bool,
}

fn item<'a>(p: &'a Pengurus, jabatan: &'a [StrukturJabatan]) -> PengurusItem<'a> {
    let j = p.jabatan(jabatan);
    PengurusItem {
        pengurus: p,
        nama_jabatan: j.map(|j| j.nama_jabatan.as_str()),
        kind: p.resolve_kind(j),
        core_role: j.is_some_and(|j| is_core_role(&j.nama_jabatan)),
    }
}

/// A validated create/update request, ready for upload and write.
struct Prepared<'f> {
    payload: PengurusPayload,
    uploads: Vec<&'f UploadedFile>,
}

fn non_empty_or(value: String, fallback: &str, last_resort: &str) -> String {
    if !value.is_empty() {
        value
    } else if !fallback.trim().is_empty() {
        fallback.trim().to_string()
    } else {
        last_resort.to_string()
    }
}

/// Position id and period, checked before anything is loaded.
fn required_fields(form: &MultipartForm) -> Result<(i64, &str), AppError> {
    let (Some(jabatan_raw), Some(periode)) = (form.text("jabatan_id"), form.text("periode")) else {
        return Err(AppError::validation(REQUIRED_MESSAGE));
    };
    let jabatan_id = jabatan_raw
        .parse()
        .map_err(|_| AppError::validation("Jabatan tidak valid"))?;
    Ok((jabatan_id, periode))
}

fn prepare<'f>(
    form: &'f MultipartForm,
    jabatan: &[StrukturJabatan],
    creating: bool,
) -> Result<Prepared<'f>, AppError> {
    let (jabatan_id, periode) = required_fields(form)?;
    let position = jabatan
        .iter()
        .find(|j| j.id == jabatan_id)
        .ok_or_else(|| AppError::validation("Jabatan tidak ditemukan"))?;

    let kind = classify(&position.nama_jabatan);
    let nama = match kind {
        JabatanKind::Plain => {
            let nama = form.text_or_empty("nama").to_string();
            if creating {
                non_empty_or(nama, &position.nama_jabatan, "Pengurus")
            } else {
                nama
            }
        }
        JabatanKind::Division => non_empty_or(
            compose_division(form.text_or_empty("ketua_divisi"), form.text_or_empty("anggota_divisi")),
            &position.nama_jabatan,
            "Divisi",
        ),
        JabatanKind::Bph => {
            let roles = BphRoles {
                ketua: form.text_or_empty("bph_ketua").to_string(),
                wakil_ketua: form.text_or_empty("bph_wakil_ketua").to_string(),
                sekretaris: form.text_or_empty("bph_sekretaris").to_string(),
                bendahara: form.text_or_empty("bph_bendahara").to_string(),
            };
            non_empty_or(roles.compose(), &position.nama_jabatan, "BPH")
        }
    };
    if nama.is_empty() {
        return Err(AppError::validation(REQUIRED_MESSAGE));
    }

    let contact = Contact {
        ttl: form.optional("ttl"),
        jabatan_pengurus: form.optional("jabatan_pengurus"),
        asal_pikr: form.optional("asal_pikr"),
        tlpn: form.optional("tlpn"),
        email: form.optional("email"),
        instagram: form.optional("instagram"),
    };
    contact.validate()?;

    let entry_kind = EntryKind::from(kind);
    let uploads = if entry_kind.is_composite() {
        let images = accepted_images(form.files_named(&IMAGE_FIELDS))?;
        if images.len() > ImageSlots::MAX {
            return Err(AppError::validation("Maksimal 3 gambar untuk divisi"));
        }
        if creating && images.is_empty() {
            return Err(AppError::validation("Pilih minimal 1 gambar untuk divisi"));
        }
        images
    } else {
        Vec::new()
    };

    Ok(Prepared {
        payload: PengurusPayload {
            nama,
            jabatan_id,
            periode: periode.to_string(),
            role_type: form
                .text("role_type")
                .and_then(RoleType::parse)
                .unwrap_or(RoleType::Administrator),
            entry_kind,
            contact,
            images: None,
        },
        uploads,
    })
}

async fn save(
    state: &AppState,
    id: Option<i64>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let form = MultipartForm::read(payload).await?;
    required_fields(&form)?;
    let jabatan = state.store.list_jabatan().await?;
    let Prepared {
        mut payload,
        uploads,
    } = prepare(&form, &jabatan, id.is_none())?;

    let urls = upload_images(
        state.storage.as_ref(),
        &uploads,
        "pengurus",
        state.config.image,
    )
    .await?;
    if !urls.is_empty() {
        payload.images = Some(ImageSlots::from_urls(urls.clone()));
    }

    let result = match id {
        None => state.store.insert_pengurus(&payload).await,
        Some(id) => state.store.update_pengurus(id, &payload).await,
    };
    let saved = result.map_err(|e| {
        log::error!("Gagal menyimpan pengurus: {}", e);
        if !urls.is_empty() {
            log::warn!("Gambar tanpa data pengurus: {:?}", urls);
        }
        e
    })?;

    let message = if id.is_none() {
        "Data berhasil ditambahkan!"
    } else {
        "Data berhasil diperbarui!"
    };
    Ok(HttpResponse::Ok().json(json!({ "message": message, "data": saved })))
}

#[get("/api/adminpanel/pengurus")]
pub async fn get_pengurus_list(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<AdminFilter>,
) -> Result<HttpResponse, AppError> {
    auth::require_admin(&req, &state.config.jwt_secret)?;

    let pengurus = state.store.list_pengurus().await?;
    let jabatan = state.store.list_jabatan().await?;
    let filtered = filter_admin(&pengurus, &jabatan, &query);
    let data: Vec<PengurusItem> = filtered.iter().map(|p| item(p, &jabatan)).collect();

    Ok(HttpResponse::Ok().json(json!({
        "data": data,
        "total": data.len(),
        "periodes": period_options(&pengurus),
    })))
}

#[get("/api/adminpanel/pengurus/{id}")]
pub async fn get_pengurus_by_id(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    auth::require_admin(&req, &state.config.jwt_secret)?;
    let id = path.into_inner();

    let pengurus = state.store.list_pengurus().await?;
    let jabatan = state.store.list_jabatan().await?;
    let found = pengurus
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::NotFound("Data pengurus tidak ditemukan".into()))?;

    let row = item(found, &jabatan);
    let form = form_fields(row.kind, &found.nama);
    Ok(HttpResponse::Ok().json(json!({ "data": row, "form": form })))
}

#[post("/api/adminpanel/pengurus")]
pub async fn create_pengurus(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    auth::require_admin(&req, &state.config.jwt_secret)?;
    save(&state, None, payload).await
}

#[put("/api/adminpanel/pengurus/{id}")]
pub async fn update_pengurus(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    auth::require_admin(&req, &state.config.jwt_secret)?;
    save(&state, Some(path.into_inner()), payload).await
}

#[delete("/api/adminpanel/pengurus/{id}")]
pub async fn delete_pengurus(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<ConfirmQuery>,
) -> Result<HttpResponse, AppError> {
    auth::require_admin(&req, &state.config.jwt_secret)?;
    require_confirmation(query.confirm)?;

    let deleted = state.store.delete_pengurus(&[path.into_inner()]).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Data pengurus tidak ditemukan".into()));
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "Data berhasil dihapus!", "deleted": deleted })))
}

#[post("/api/adminpanel/pengurus/bulk-delete")]
pub async fn bulk_delete_pengurus(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<BulkDeleteRequest>,
) -> Result<HttpResponse, AppError> {
    auth::require_admin(&req, &state.config.jwt_secret)?;
    let ids = body.into_inner().into_ids()?;

    let deleted = state.store.delete_pengurus(&ids).await?;
    log::info!("Bulk delete pengurus: {} dari {} dipilih", deleted, ids.len());
    Ok(HttpResponse::Ok().json(json!({
        "message": format!("{} data berhasil dihapus!", deleted),
        "deleted": deleted,
    })))
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<ExportFormat>,
    pub periode: Option<String>,
    pub role_type: Option<String>,
    pub q: Option<String>,
}

#[get("/api/adminpanel/pengurus/export")]
pub async fn export_pengurus(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<ExportQuery>,
) -> Result<HttpResponse, AppError> {
    auth::require_admin(&req, &state.config.jwt_secret)?;
    let ExportQuery {
        format,
        periode,
        role_type,
        q,
    } = query.into_inner();
    let format = format.unwrap_or_default();
    let filter = AdminFilter { periode, role_type, q };

    let pengurus = state.store.list_pengurus().await?;
    let jabatan = state.store.list_jabatan().await?;
    let filtered = filter_admin(&pengurus, &jabatan, &filter);
    let rows = export::rows(&filtered, &jabatan);

    let body = match format {
        ExportFormat::Csv => export::to_csv(&rows)?,
        ExportFormat::Xlsx => web::block(move || export::to_xlsx(&rows)).await??,
    };
    let filename = export::export_filename(filter.periode_label(), format, Local::now());

    Ok(HttpResponse::Ok()
        .content_type(format.content_type())
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(body))
}

#[derive(Debug, Deserialize)]
pub struct StrukturQuery {
    pub periode: Option<String>,
    pub q: Option<String>,
}

#[get("/api/pengurus")]
pub async fn get_struktur(
    state: web::Data<AppState>,
    query: web::Query<StrukturQuery>,
) -> Result<HttpResponse, AppError> {
    let pengurus = state.store.list_pengurus().await?;
    let jabatan = state.store.list_jabatan().await?;

    let view = build_hierarchy(
        &pengurus,
        &jabatan,
        query.periode.as_deref(),
        query.q.as_deref().unwrap_or(""),
        Local::now().year(),
    );
    Ok(HttpResponse::Ok().json(view))
}
