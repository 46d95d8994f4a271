// src/controllers/mod.rs
use std::sync::Arc;

use actix_web::web;

use crate::config::AppConfig;
use crate::storage::ObjectStorage;
use crate::store::RecordStore;

pub mod dashboard_controller;
pub mod home_controller;
pub mod image_optimizer;
pub mod jabatan_controller;
pub mod kegiatan_controller;
pub mod pengurus_controller;

/// Shared by every worker through `web::Data`.
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub storage: Arc<dyn ObjectStorage>,
    pub config: AppConfig,
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg
        //home_controller
        .service(home_controller::get_home)
        .service(home_controller::get_faq)
        //dashboard_controller
        .service(dashboard_controller::get_dashboard)
        //pengurus_controller (export before {id})
        .service(pengurus_controller::export_pengurus)
        .service(pengurus_controller::bulk_delete_pengurus)
        .service(pengurus_controller::get_pengurus_list)
        .service(pengurus_controller::get_pengurus_by_id)
        .service(pengurus_controller::create_pengurus)
        .service(pengurus_controller::update_pengurus)
        .service(pengurus_controller::delete_pengurus)
        .service(pengurus_controller::get_struktur)
        //jabatan_controller
        .service(jabatan_controller::get_jabatan)
        .service(jabatan_controller::create_jabatan)
        .service(jabatan_controller::update_jabatan)
        .service(jabatan_controller::delete_jabatan)
        //kegiatan_controller
        .service(kegiatan_controller::bulk_delete_kegiatan)
        .service(kegiatan_controller::get_kegiatan_list)
        .service(kegiatan_controller::get_kegiatan_by_id)
        .service(kegiatan_controller::create_kegiatan)
        .service(kegiatan_controller::update_kegiatan)
        .service(kegiatan_controller::delete_kegiatan);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use actix_web::web;

    use super::AppState;
    use crate::auth::issue_for_tests;
    use crate::config::AppConfig;
    use crate::storage::memory::MemoryStorage;
    use crate::store::memory::MemoryStore;

    pub fn state(store: Arc<MemoryStore>, storage: Arc<MemoryStorage>) -> web::Data<AppState> {
        web::Data::new(AppState {
            store,
            storage,
            config: AppConfig::for_tests(),
        })
    }

    pub fn bearer() -> (&'static str, String) {
        (
            "Authorization",
            format!("Bearer {}", issue_for_tests("authenticated", "test-secret")),
        )
    }
}
