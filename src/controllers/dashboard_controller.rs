use std::collections::BTreeSet;

use actix_web::{HttpRequest, HttpResponse, get, web};
use serde::Serialize;

use super::AppState;
use crate::auth;
use crate::error::AppError;
use crate::models::pengurus::{Pengurus, RoleType};
use crate::store::StoreError;

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_pengurus: usize,
    pub total_jabatan: usize,
    pub total_kegiatan: usize,
    pub total_periode: usize,
    pub administrator: usize,
    pub member: usize,
}

fn or_empty<T>(what: &str, result: Result<Vec<T>, StoreError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        log::error!("Gagal memuat {}: {}", what, e);
        Vec::new()
    })
}

fn stats(pengurus: &[Pengurus], total_jabatan: usize, total_kegiatan: usize) -> DashboardStats {
    let periodes: BTreeSet<&str> = pengurus.iter().map(|p| p.periode.as_str()).collect();
    let member = pengurus
        .iter()
        .filter(|p| p.role() == RoleType::Member)
        .count();
    DashboardStats {
        total_pengurus: pengurus.len(),
        total_jabatan,
        total_kegiatan,
        total_periode: periodes.len(),
        administrator: pengurus.len() - member,
        member,
    }
}

#[get("/api/adminpanel/dashboard")]
pub async fn get_dashboard(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    auth::require_admin(&req, &state.config.jwt_secret)?;

    let pengurus = or_empty("pengurus", state.store.list_pengurus().await);
    let jabatan = or_empty("struktur jabatan", state.store.list_jabatan().await);
    let kegiatan = or_empty("kegiatan", state.store.list_kegiatan(None).await);

    let stats = stats(&pengurus, jabatan.len(), kegiatan.len());
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "pengurus": pengurus,
        "jabatan": jabatan,
        "kegiatan": kegiatan,
        "stats": stats,
    })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use actix_web::App;
    use serde_json::Value;

    use super::*;
    use crate::controllers::{routes, testing};
    use crate::organization::filter::fixtures::{jabatan, pengurus};
    use crate::storage::memory::MemoryStorage;
    use crate::store::memory::MemoryStore;

    #[test]
    fn counts_roles_and_periods() {
        let mut rows = vec![
            pengurus(1, "Andi", 1, "2023-2024"),
            pengurus(2, "Budi", 1, "2024-2025"),
            pengurus(3, "Citra", 1, "2024-2025"),
        ];
        rows[2].role_type = Some(RoleType::Member);
        rows[0].role_type = None;

        assert_eq!(
            stats(&rows, 4, 2),
            DashboardStats {
                total_pengurus: 3,
                total_jabatan: 4,
                total_kegiatan: 2,
                total_periode: 2,
                administrator: 2,
                member: 1,
            }
        );
    }

    #[actix_web::test]
    async fn members_are_sorted_by_period_descending() {
        let store = Arc::new(
            MemoryStore::new()
                .with_jabatan(vec![jabatan(1, "Ketua Umum", 1)])
                .with_pengurus(vec![
                    pengurus(1, "Andi", 1, "2023-2024"),
                    pengurus(2, "Budi", 1, "2024-2025"),
                ]),
        );
        let app = actix_test::init_service(
            App::new()
                .app_data(testing::state(store, Arc::new(MemoryStorage::new())))
                .configure(routes),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/api/adminpanel/dashboard")
            .insert_header(testing::bearer())
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["pengurus"][0]["nama"], "Budi");
        assert_eq!(body["stats"]["total_pengurus"], 2);
        assert_eq!(body["stats"]["total_jabatan"], 1);
    }

    #[actix_web::test]
    async fn failed_reads_degrade_to_empty_collections() {
        let store = Arc::new(MemoryStore::new().failing_reads("koneksi terputus"));
        let app = actix_test::init_service(
            App::new()
                .app_data(testing::state(store, Arc::new(MemoryStorage::new())))
                .configure(routes),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/api/adminpanel/dashboard")
            .insert_header(testing::bearer())
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["pengurus"], serde_json::json!([]));
        assert_eq!(body["kegiatan"], serde_json::json!([]));
        assert_eq!(body["stats"]["total_kegiatan"], 0);
    }
}
