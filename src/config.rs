// src/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} wajib diisi")]
    Missing(&'static str),
    #[error("Nilai {name} tidak valid: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Supabase,
    MySql,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Supabase,
    Local,
}

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub service_key: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ImageConfig {
    pub webp_quality: f32,
    pub max_width: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origin: String,
    pub store_backend: StoreBackend,
    pub storage_backend: StorageBackend,
    pub supabase: Option<SupabaseConfig>,
    pub media_bucket: String,
    pub database_url: Option<String>,
    pub upload_dir: PathBuf,
    pub public_base_url: String,
    pub jwt_secret: String,
    pub site_url: String,
    pub image: ImageConfig,
    pub http_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let store_backend = match get("STORE_BACKEND").as_deref() {
            None | Some("supabase") => StoreBackend::Supabase,
            Some("mysql") => StoreBackend::MySql,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "STORE_BACKEND",
                    value: other.to_string(),
                });
            }
        };

        let storage_backend = match get("STORAGE_BACKEND").as_deref() {
            None | Some("supabase") => StorageBackend::Supabase,
            Some("local") => StorageBackend::Local,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "STORAGE_BACKEND",
                    value: other.to_string(),
                });
            }
        };

        let needs_supabase =
            store_backend == StoreBackend::Supabase || storage_backend == StorageBackend::Supabase;
        let supabase = if needs_supabase {
            Some(SupabaseConfig {
                url: get("SUPABASE_URL")
                    .ok_or(ConfigError::Missing("SUPABASE_URL"))?
                    .trim_end_matches('/')
                    .to_string(),
                service_key: get("SUPABASE_SERVICE_KEY")
                    .ok_or(ConfigError::Missing("SUPABASE_SERVICE_KEY"))?,
            })
        } else {
            None
        };

        let database_url = get("DATABASE_URL");
        if store_backend == StoreBackend::MySql && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let port = parse_or("PORT", get("PORT"), 8080u16)?;
        let host = get("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let public_base_url = get("PUBLIC_BASE_URL")
            .unwrap_or_else(|| format!("http://localhost:{}", port))
            .trim_end_matches('/')
            .to_string();

        let webp_quality: f32 = parse_or("WEBP_QUALITY", get("WEBP_QUALITY"), 80.0)?;
        let max_width: u32 = parse_or("IMAGE_MAX_WIDTH", get("IMAGE_MAX_WIDTH"), 1600)?;
        let timeout_secs: u64 = parse_or("HTTP_TIMEOUT_SECS", get("HTTP_TIMEOUT_SECS"), 30)?;

        Ok(AppConfig {
            host,
            port,
            cors_allowed_origin: get("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            store_backend,
            storage_backend,
            supabase,
            media_bucket: get("MEDIA_BUCKET").unwrap_or_else(|| "media".to_string()),
            database_url,
            upload_dir: PathBuf::from(get("UPLOAD_DIR").unwrap_or_else(|| "uploads".to_string())),
            public_base_url,
            jwt_secret: get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?,
            site_url: get("SITE_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string())
                .trim_end_matches('/')
                .to_string(),
            image: ImageConfig {
                webp_quality: webp_quality.clamp(1.0, 100.0),
                max_width: max_width.max(1),
            },
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
impl AppConfig {
    pub fn for_tests() -> Self {
        AppConfig {
            host: "127.0.0.1".into(),
            port: 8080,
            cors_allowed_origin: "http://localhost:3000".into(),
            store_backend: StoreBackend::Supabase,
            storage_backend: StorageBackend::Local,
            supabase: None,
            media_bucket: "media".into(),
            database_url: None,
            upload_dir: PathBuf::from("uploads"),
            public_base_url: "http://localhost:8080".into(),
            jwt_secret: "test-secret".into(),
            site_url: "https://genbi.test".into(),
            image: ImageConfig {
                webp_quality: 80.0,
                max_width: 1600,
            },
            http_timeout: Duration::from_secs(5),
        }
    }
}
