// src/models/pengurus.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ImageSlots;
use super::struktur_jabatan::StrukturJabatan;
use crate::organization::classify::{JabatanKind, classify};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    Administrator,
    Member,
}

impl RoleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Administrator => "administrator",
            RoleType::Member => "member",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "administrator" => Some(RoleType::Administrator),
            "member" => Some(RoleType::Member),
            _ => None,
        }
    }
}

/// How a row is shaped, written explicitly when the row is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Individual,
    Divisi,
    Bph,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Individual => "individual",
            EntryKind::Divisi => "divisi",
            EntryKind::Bph => "bph",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "individual" => Some(EntryKind::Individual),
            "divisi" => Some(EntryKind::Divisi),
            "bph" => Some(EntryKind::Bph),
            _ => None,
        }
    }

    pub fn is_composite(&self) -> bool {
        !matches!(self, EntryKind::Individual)
    }
}

impl From<JabatanKind> for EntryKind {
    fn from(kind: JabatanKind) -> Self {
        match kind {
            JabatanKind::Plain => EntryKind::Individual,
            JabatanKind::Division => EntryKind::Divisi,
            JabatanKind::Bph => EntryKind::Bph,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pengurus {
    pub id: i64,
    pub nama: String,
    #[serde(default)]
    pub ttl: Option<String>,
    #[serde(default)]
    pub jabatan_pengurus: Option<String>,
    #[serde(default)]
    pub asal_pikr: Option<String>,
    #[serde(default)]
    pub tlpn: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub images: ImageSlots,
    pub jabatan_id: i64,
    pub periode: String,
    #[serde(default)]
    pub role_type: Option<RoleType>,
    #[serde(default)]
    pub entry_kind: Option<EntryKind>,
}

impl Pengurus {
    /// Rows without a role are public, matching the admin form default.
    pub fn role(&self) -> RoleType {
        self.role_type.unwrap_or(RoleType::Administrator)
    }

    pub fn is_public(&self) -> bool {
        self.role() == RoleType::Administrator
    }

    pub fn jabatan<'a>(&self, jabatan: &'a [StrukturJabatan]) -> Option<&'a StrukturJabatan> {
        jabatan.iter().find(|j| j.id == self.jabatan_id)
    }

    /// Uses the stored kind; legacy rows fall back to their position's classification.
    pub fn resolve_kind(&self, jabatan: Option<&StrukturJabatan>) -> EntryKind {
        match self.entry_kind {
            Some(kind) => kind,
            None => jabatan
                .map(|j| EntryKind::from(classify(&j.nama_jabatan)))
                .unwrap_or(EntryKind::Individual),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Contact {
    pub ttl: Option<String>,
    pub jabatan_pengurus: Option<String>,
    pub asal_pikr: Option<String>,
    #[validate(length(max = 32, message = "Nomor telepon terlalu panjang"))]
    pub tlpn: Option<String>,
    #[validate(email(message = "Email tidak valid"))]
    pub email: Option<String>,
    #[validate(length(max = 64, message = "Username Instagram terlalu panjang"))]
    pub instagram: Option<String>,
}

/// Row written by create/update. `images` is omitted entirely when the existing
/// image columns must stay untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PengurusPayload {
    pub nama: String,
    pub jabatan_id: i64,
    pub periode: String,
    pub role_type: RoleType,
    pub entry_kind: EntryKind,
    #[serde(flatten)]
    pub contact: Contact,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub images: Option<ImageSlots>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_store_row_with_missing_optionals() {
        let row: Pengurus = serde_json::from_value(json!({
            "id": 7,
            "nama": "Ketua Divisi : A Anggota : B     C",
            "jabatan_id": 12,
            "periode": "2024-2025",
            "image_url_1": "https://cdn/x.webp",
            "image_url_2": null
        }))
        .unwrap();

        assert_eq!(row.role(), RoleType::Administrator);
        assert!(row.is_public());
        assert_eq!(row.images.urls(), vec!["https://cdn/x.webp"]);
        assert_eq!(row.entry_kind, None);
    }

    #[test]
    fn legacy_rows_resolve_kind_from_position() {
        let row: Pengurus = serde_json::from_value(json!({
            "id": 1, "nama": "x", "jabatan_id": 3, "periode": "2024-2025"
        }))
        .unwrap();
        let divisi = StrukturJabatan {
            id: 3,
            nama_jabatan: "Divisi Pendidikan".into(),
            urutan: 9,
        };
        assert_eq!(row.resolve_kind(Some(&divisi)), EntryKind::Divisi);
        assert_eq!(row.resolve_kind(None), EntryKind::Individual);

        let stored = Pengurus {
            entry_kind: Some(EntryKind::Bph),
            ..row
        };
        assert_eq!(stored.resolve_kind(Some(&divisi)), EntryKind::Bph);
    }

    #[test]
    fn payload_omits_untouched_images() {
        let payload = PengurusPayload {
            nama: "Budi".into(),
            jabatan_id: 1,
            periode: "2024-2025".into(),
            role_type: RoleType::Member,
            entry_kind: EntryKind::Individual,
            contact: Contact::default(),
            images: None,
        };
        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(v["role_type"], "member");
        assert_eq!(v["entry_kind"], "individual");
        assert!(v.get("image_url_1").is_none());

        let with_images = PengurusPayload {
            images: Some(ImageSlots::from_urls(["a"])),
            ..payload
        };
        let v = serde_json::to_value(&with_images).unwrap();
        assert_eq!(v["image_url_1"], "a");
        assert!(v["image_url_2"].is_null());
    }

    #[test]
    fn contact_email_is_validated() {
        let contact = Contact {
            email: Some("bukan-email".into()),
            ..Contact::default()
        };
        assert!(contact.validate().is_err());
        assert!(Contact::default().validate().is_ok());
    }
}
