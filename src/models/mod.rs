// src/models/mod.rs
pub mod kegiatan;
pub mod pengurus;
pub mod struktur_jabatan;

use serde::{Deserialize, Serialize};

/// The three optional image columns shared by division entries and kegiatan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSlots {
    #[serde(default)]
    pub image_url_1: Option<String>,
    #[serde(default)]
    pub image_url_2: Option<String>,
    #[serde(default)]
    pub image_url_3: Option<String>,
}

impl ImageSlots {
    pub const MAX: usize = 3;

    /// Fills the slots in order; anything past the third url is dropped.
    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut it = urls.into_iter().map(Into::into);
        ImageSlots {
            image_url_1: it.next(),
            image_url_2: it.next(),
            image_url_3: it.next(),
        }
    }

    pub fn urls(&self) -> Vec<&str> {
        [&self.image_url_1, &self.image_url_2, &self.image_url_3]
            .into_iter()
            .filter_map(|u| u.as_deref())
            .filter(|u| !u.trim().is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.urls().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_fill_in_order_and_skip_blanks() {
        let slots = ImageSlots::from_urls(["a", "b", "c", "d"]);
        assert_eq!(slots.urls(), vec!["a", "b", "c"]);

        let slots = ImageSlots {
            image_url_1: None,
            image_url_2: Some("  ".into()),
            image_url_3: Some("x".into()),
        };
        assert_eq!(slots.urls(), vec!["x"]);
        assert!(ImageSlots::default().is_empty());
    }
}
