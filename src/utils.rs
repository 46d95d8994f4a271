// src/utils.rs
use std::collections::HashMap;

use actix_multipart::Multipart;
use bytes::BytesMut;
use chrono::Utc;
use futures::TryStreamExt;
use rand::Rng;
use serde::Deserialize;

use crate::error::AppError;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
pub const MAX_FORM_BYTES: usize = 50 * 1024 * 1024;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn random_base36(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// `<prefix>/<unix-millis>-<11 random base36 chars>.webp`
pub fn storage_path(prefix: &str) -> String {
    format!(
        "{}/{}-{}.webp",
        prefix.trim_matches('/'),
        Utc::now().timestamp_millis(),
        random_base36(11)
    )
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

pub fn require_confirmation(confirm: bool) -> Result<(), AppError> {
    if confirm {
        Ok(())
    } else {
        Err(AppError::ConfirmationRequired)
    }
}

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    #[serde(default)]
    pub ids: Vec<i64>,
    #[serde(default)]
    pub confirm: bool,
}

impl BulkDeleteRequest {
    /// Confirmed, non-empty, duplicate-free id list in first-seen order.
    pub fn into_ids(self) -> Result<Vec<i64>, AppError> {
        require_confirmation(self.confirm)?;
        let mut ids = Vec::with_capacity(self.ids.len());
        for id in self.ids {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        if ids.is_empty() {
            return Err(AppError::validation("Pilih minimal satu data untuk dihapus"));
        }
        Ok(ids)
    }
}

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub field: String,
    pub filename: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// A fully buffered multipart form: text fields by name plus every file part.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    pub files: Vec<UploadedFile>,
}

impl MultipartForm {
    pub async fn read(mut payload: Multipart) -> Result<Self, AppError> {
        let mut form = MultipartForm::default();
        let mut total = 0usize;

        while let Some(mut field) = payload
            .try_next()
            .await
            .map_err(|e| AppError::validation(format!("Form tidak valid: {}", e)))?
        {
            let name = field.name().unwrap_or_default().to_string();
            let filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_string);
            let content_type = field
                .content_type()
                .map(|ct| ct.to_string())
                .unwrap_or_default();

            let mut bytes = BytesMut::new();
            while let Some(chunk) = field
                .try_next()
                .await
                .map_err(|e| AppError::validation(format!("Form tidak valid: {}", e)))?
            {
                total += chunk.len();
                if total > MAX_FORM_BYTES {
                    return Err(AppError::validation("Ukuran form terlalu besar"));
                }
                bytes.extend_from_slice(&chunk);
            }

            match filename {
                Some(filename) => {
                    if bytes.is_empty() {
                        continue;
                    }
                    form.files.push(UploadedFile {
                        field: name,
                        filename: Some(filename),
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
                None => {
                    let mut value = String::from_utf8_lossy(&bytes).to_string();
                    // browsers post unset inputs as the literal text
                    if value == "null" || value == "undefined" {
                        value.clear();
                    }
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    /// Trimmed value; `None` when absent or blank.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn text_or_empty(&self, name: &str) -> &str {
        self.text(name).unwrap_or("")
    }

    pub fn optional(&self, name: &str) -> Option<String> {
        self.text(name).map(str::to_string)
    }

    pub fn files_named(&self, names: &[&str]) -> Vec<&UploadedFile> {
        self.files
            .iter()
            .filter(|f| names.contains(&f.field.as_str()))
            .collect()
    }

    #[cfg(test)]
    pub fn from_parts(fields: &[(&str, &str)], files: Vec<UploadedFile>) -> Self {
        MultipartForm {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files,
        }
    }
}
