// main.rs
use actix_cors::Cors;
use actix_files::Files;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::web::JsonConfig;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;

use crate::config::{AppConfig, StorageBackend};
use crate::controllers::AppState;
use crate::error::AppError;
use crate::utils::MAX_FORM_BYTES;

mod auth;
mod config;
mod content;
mod controllers;
mod db;
mod error;
mod export;
mod models;
mod organization;
mod storage;
mod store;
mod utils;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("starting up...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Konfigurasi tidak valid: {}", e);
            std::process::exit(1);
        }
    };
    let store = match store::connect(&config).await {
        Ok(store) => store,
        Err(e) => {
            log::error!("Gagal inisialisasi penyimpanan data: {}", e);
            std::process::exit(1);
        }
    };
    let storage = match storage::connect(&config) {
        Ok(storage) => storage,
        Err(e) => {
            log::error!("Gagal inisialisasi penyimpanan gambar: {}", e);
            std::process::exit(1);
        }
    };

    let bind = (config.host.clone(), config.port);
    log::info!("listening on {}:{}", bind.0, bind.1);
    let state = web::Data::new(AppState {
        store,
        storage,
        config,
    });

    HttpServer::new(move || {
        let config = &state.config;
        let cors = Cors::default()
            .allowed_origin(&config.cors_allowed_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
            .supports_credentials()
            .max_age(3600);

        let json_config = JsonConfig::default()
            .limit(MAX_FORM_BYTES)
            .content_type_required(false)
            .error_handler(|err, _req| {
                log::error!("JSON payload error: {}", err);
                AppError::validation(format!("Payload tidak valid: {}", err)).into()
            });

        let payload_config = web::PayloadConfig::new(MAX_FORM_BYTES);

        let mut app = App::new()
            .app_data(state.clone())
            .app_data(json_config)
            .app_data(payload_config)
            .wrap(cors)
            .wrap(Logger::default());

        if config.storage_backend == StorageBackend::Local {
            app = app.service(Files::new(
                storage::local::PUBLIC_PREFIX,
                config.upload_dir.clone(),
            ));
        }

        app.configure(controllers::routes)
    })
    .bind(bind)?
    .run()
    .await
}
