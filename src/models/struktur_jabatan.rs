// src/models/struktur_jabatan.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StrukturJabatan {
    pub id: i64,
    pub nama_jabatan: String,
    pub urutan: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JabatanPayload {
    pub nama_jabatan: String,
    pub urutan: i32,
}

/// Raw admin form; `urutan` arrives either as a number or as the text of a number input.
#[derive(Debug, Deserialize)]
pub struct JabatanForm {
    #[serde(default)]
    pub nama_jabatan: Option<String>,
    #[serde(default)]
    pub urutan: Option<Value>,
}

impl JabatanForm {
    pub fn into_payload(self) -> Result<JabatanPayload, AppError> {
        let nama_jabatan = self.nama_jabatan.unwrap_or_default().trim().to_string();
        let urutan_raw = match self.urutan {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.trim().to_string(),
            _ => String::new(),
        };

        if nama_jabatan.is_empty() || urutan_raw.is_empty() {
            return Err(AppError::validation("Nama Jabatan dan Urutan wajib diisi."));
        }

        let urutan = urutan_raw
            .parse::<i32>()
            .map_err(|_| AppError::validation("Urutan harus berupa angka bulat"))?;

        Ok(JabatanPayload {
            nama_jabatan,
            urutan,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(v: Value) -> JabatanForm {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn accepts_number_or_numeric_text() {
        let p = form(json!({"nama_jabatan": " Ketua Umum ", "urutan": 1}))
            .into_payload()
            .unwrap();
        assert_eq!(p.nama_jabatan, "Ketua Umum");
        assert_eq!(p.urutan, 1);

        let p = form(json!({"nama_jabatan": "Divisi Pendidikan", "urutan": "9"}))
            .into_payload()
            .unwrap();
        assert_eq!(p.urutan, 9);
    }

    #[test]
    fn rejects_missing_or_non_integer_values() {
        let err = form(json!({"nama_jabatan": "", "urutan": 2}))
            .into_payload()
            .unwrap_err();
        assert_eq!(err.to_string(), "Nama Jabatan dan Urutan wajib diisi.");

        assert!(form(json!({"nama_jabatan": "Sekretaris"})).into_payload().is_err());
        assert!(
            form(json!({"nama_jabatan": "Sekretaris", "urutan": "dua"}))
                .into_payload()
                .is_err()
        );
        assert!(
            form(json!({"nama_jabatan": "Sekretaris", "urutan": 2.5}))
                .into_payload()
                .is_err()
        );
    }
}
