// src/organization/classify.rs
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JabatanKind {
    Plain,
    Division,
    Bph,
}

const CORE_ROLES: [&str; 7] = [
    "kepala sekolah",
    "wakil ketua umum",
    "sekretaris",
    "bendahara",
    "ketua umum",
    "pembina",
    "pengelola",
];

/// Classifies a position by its name alone. Division wins over BPH when both could match.
pub fn classify(nama_jabatan: &str) -> JabatanKind {
    let name = nama_jabatan.trim().to_lowercase();
    if name.starts_with("divisi") || name.starts_with("devisi") {
        JabatanKind::Division
    } else if name == "bph" || name.contains("badan pengurus harian") {
        JabatanKind::Bph
    } else {
        JabatanKind::Plain
    }
}

pub fn is_core_role(nama_jabatan: &str) -> bool {
    let name = nama_jabatan.trim().to_lowercase();
    CORE_ROLES.contains(&name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_prefixes() {
        assert_eq!(classify("Divisi Pendidikan"), JabatanKind::Division);
        assert_eq!(classify("  DEVISI Lingkungan"), JabatanKind::Division);
        assert_eq!(classify("Kepala Divisi"), JabatanKind::Plain);
    }

    #[test]
    fn bph_names() {
        assert_eq!(classify("BPH"), JabatanKind::Bph);
        assert_eq!(classify("bph "), JabatanKind::Bph);
        assert_eq!(classify("Badan Pengurus Harian"), JabatanKind::Bph);
        assert_eq!(classify("Inti Badan Pengurus Harian 2024"), JabatanKind::Bph);
        assert_eq!(classify("BPH Inti"), JabatanKind::Plain);
    }

    #[test]
    fn division_takes_precedence() {
        assert_eq!(
            classify("Divisi Badan Pengurus Harian"),
            JabatanKind::Division
        );
    }

    #[test]
    fn core_roles() {
        assert!(is_core_role("Ketua Umum"));
        assert!(is_core_role(" sekretaris "));
        assert!(!is_core_role("Divisi Pendidikan"));
        assert_eq!(classify("Ketua Umum"), JabatanKind::Plain);
    }
}
