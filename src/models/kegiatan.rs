// src/models/kegiatan.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ImageSlots;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardRatio {
    #[default]
    #[serde(rename = "landscape")]
    Landscape,
    #[serde(rename = "insta_4_5")]
    Insta4x5,
    #[serde(rename = "poster_2_3")]
    Poster2x3,
}

impl CardRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardRatio::Landscape => "landscape",
            CardRatio::Insta4x5 => "insta_4_5",
            CardRatio::Poster2x3 => "poster_2_3",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "landscape" => Some(CardRatio::Landscape),
            "insta_4_5" => Some(CardRatio::Insta4x5),
            "poster_2_3" => Some(CardRatio::Poster2x3),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kegiatan {
    pub id: i64,
    pub judul: String,
    #[serde(default)]
    pub deskripsi: Option<String>,
    #[serde(default)]
    pub tanggal: Option<NaiveDate>,
    #[serde(flatten)]
    pub images: ImageSlots,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub card_ratio: Option<CardRatio>,
}

impl Kegiatan {
    pub fn matches(&self, needle: &str) -> bool {
        self.judul.to_lowercase().contains(needle)
            || self
                .deskripsi
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct KegiatanPayload {
    #[validate(length(min = 1, max = 200, message = "Judul wajib diisi (maksimal 200 karakter)"))]
    pub judul: String,
    pub deskripsi: Option<String>,
    pub tanggal: Option<NaiveDate>,
    pub card_ratio: CardRatio,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub images: Option<ImageSlots>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_supabase_row() {
        let k: Kegiatan = serde_json::from_value(json!({
            "id": 3,
            "judul": "Bakti Sosial",
            "deskripsi": "Berbagi sembako",
            "tanggal": "2024-05-01",
            "image_url_1": "https://cdn/1.webp",
            "created_at": "2024-05-02T10:00:00.123456+00:00",
            "card_ratio": "insta_4_5"
        }))
        .unwrap();

        assert_eq!(k.card_ratio, Some(CardRatio::Insta4x5));
        assert_eq!(k.tanggal, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert!(k.created_at.is_some());
        assert!(k.matches("sembako"));
        assert!(!k.matches("lomba"));
    }

    #[test]
    fn card_ratio_round_trips_through_text() {
        for ratio in [CardRatio::Landscape, CardRatio::Insta4x5, CardRatio::Poster2x3] {
            assert_eq!(CardRatio::parse(ratio.as_str()), Some(ratio));
        }
        assert_eq!(CardRatio::parse("square"), None);
    }
}
