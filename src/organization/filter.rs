// src/organization/filter.rs
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::pengurus::{Pengurus, RoleType};
use crate::models::struktur_jabatan::StrukturJabatan;

pub const ALL: &str = "all";

/// Admin table filter. `None` and `"all"` both mean "no filter".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminFilter {
    pub periode: Option<String>,
    pub role_type: Option<String>,
    pub q: Option<String>,
}

impl AdminFilter {
    fn periode(&self) -> Option<&str> {
        self.periode
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty() && *p != ALL)
    }

    fn role_type(&self) -> Option<RoleType> {
        self.role_type.as_deref().and_then(RoleType::parse)
    }

    fn query(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty())
    }

    /// Label used in export file names.
    pub fn periode_label(&self) -> &str {
        self.periode().unwrap_or("semua")
    }
}

fn jabatan_name(jabatan: &[StrukturJabatan], id: i64) -> &str {
    jabatan
        .iter()
        .find(|j| j.id == id)
        .map(|j| j.nama_jabatan.as_str())
        .unwrap_or("")
}

fn contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|f| f.to_lowercase().contains(needle))
}

pub fn filter_admin<'a>(
    pengurus: &'a [Pengurus],
    jabatan: &[StrukturJabatan],
    filter: &AdminFilter,
) -> Vec<&'a Pengurus> {
    let periode = filter.periode();
    let role = filter.role_type();
    let query = filter.query();

    pengurus
        .iter()
        .filter(|p| periode.is_none_or(|want| p.periode == want))
        .filter(|p| role.is_none_or(|want| p.role() == want))
        .filter(|p| match &query {
            None => true,
            Some(q) => {
                contains(Some(&p.nama), q)
                    || contains(p.email.as_deref(), q)
                    || contains(Some(&p.periode), q)
                    || contains(Some(jabatan_name(jabatan, p.jabatan_id)), q)
            }
        })
        .collect()
}

/// `["all", ...]` followed by distinct periods, newest first.
pub fn period_options(pengurus: &[Pengurus]) -> Vec<String> {
    let distinct: BTreeSet<&str> = pengurus
        .iter()
        .map(|p| p.periode.as_str())
        .filter(|p| !p.trim().is_empty())
        .collect();
    std::iter::once(ALL.to_string())
        .chain(distinct.into_iter().rev().map(str::to_string))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JabatanRow {
    #[serde(flatten)]
    pub jabatan: StrukturJabatan,
    pub member_count: usize,
    pub can_delete: bool,
}

pub fn member_count(pengurus: &[Pengurus], jabatan_id: i64) -> usize {
    pengurus.iter().filter(|p| p.jabatan_id == jabatan_id).count()
}

pub fn filter_jabatan(
    jabatan: &[StrukturJabatan],
    pengurus: &[Pengurus],
    q: Option<&str>,
) -> Vec<JabatanRow> {
    let needle = q.map(|q| q.trim().to_lowercase()).unwrap_or_default();
    let mut rows: Vec<JabatanRow> = jabatan
        .iter()
        .filter(|j| needle.is_empty() || j.nama_jabatan.to_lowercase().contains(&needle))
        .map(|j| {
            let count = member_count(pengurus, j.id);
            JabatanRow {
                jabatan: j.clone(),
                member_count: count,
                can_delete: count == 0,
            }
        })
        .collect();
    rows.sort_by_key(|r| r.jabatan.urutan);
    rows
}

/// Public search over name, position name and the free-text role field.
pub fn search_public<'a>(
    pengurus: &[&'a Pengurus],
    jabatan: &[StrukturJabatan],
    q: &str,
) -> Vec<&'a Pengurus> {
    let needle = q.trim().to_lowercase();
    if needle.is_empty() {
        return pengurus.to_vec();
    }
    pengurus
        .iter()
        .copied()
        .filter(|p| {
            let hay = format!(
                "{} {} {}",
                p.nama,
                jabatan_name(jabatan, p.jabatan_id),
                p.jabatan_pengurus.as_deref().unwrap_or("")
            )
            .to_lowercase();
            hay.contains(&needle)
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::{jabatan, pengurus};
    use super::*;

    fn sample() -> (Vec<StrukturJabatan>, Vec<Pengurus>) {
        let jabatan = vec![
            jabatan(1, "Ketua Umum", 1),
            jabatan(2, "Sekretaris", 2),
            jabatan(9, "Divisi Pendidikan", 9),
        ];
        let mut p = vec![
            pengurus(1, "Andi", 1, "2024-2025"),
            pengurus(2, "Budi", 2, "2024-2025"),
            pengurus(3, "Citra", 2, "2023-2024"),
            pengurus(4, "Ketua Divisi : Dewi Anggota : Eko", 9, "2024-2025"),
        ];
        p[1].email = Some("budi@genbi.id".into());
        p[2].role_type = Some(RoleType::Member);
        p[3].role_type = None;
        (jabatan, p)
    }

    fn ids(list: &[&Pengurus]) -> Vec<i64> {
        list.iter().map(|p| p.id).collect()
    }

    #[test]
    fn no_filter_returns_everything() {
        let (j, p) = sample();
        assert_eq!(ids(&filter_admin(&p, &j, &AdminFilter::default())), vec![1, 2, 3, 4]);

        let all = AdminFilter {
            periode: Some("all".into()),
            role_type: Some("all".into()),
            q: Some("   ".into()),
        };
        assert_eq!(filter_admin(&p, &j, &all).len(), 4);
    }

    #[test]
    fn filters_by_period_and_role() {
        let (j, p) = sample();
        let f = AdminFilter {
            periode: Some("2024-2025".into()),
            ..AdminFilter::default()
        };
        assert_eq!(ids(&filter_admin(&p, &j, &f)), vec![1, 2, 4]);

        let f = AdminFilter {
            role_type: Some("member".into()),
            ..AdminFilter::default()
        };
        assert_eq!(ids(&filter_admin(&p, &j, &f)), vec![3]);

        // a missing role counts as administrator
        let f = AdminFilter {
            role_type: Some("administrator".into()),
            ..AdminFilter::default()
        };
        assert_eq!(ids(&filter_admin(&p, &j, &f)), vec![1, 2, 4]);
    }

    #[test]
    fn query_matches_name_email_period_and_position() {
        let (j, p) = sample();
        let by = |q: &str| {
            ids(&filter_admin(
                &p,
                &j,
                &AdminFilter {
                    q: Some(q.into()),
                    ..AdminFilter::default()
                },
            ))
        };
        assert_eq!(by("ANDI"), vec![1]);
        assert_eq!(by("genbi.id"), vec![2]);
        assert_eq!(by("2023"), vec![3]);
        assert_eq!(by("sekre"), vec![2, 3]);
        assert_eq!(by("pendidikan"), vec![4]);
        assert!(by("zzz").is_empty());
    }

    #[test]
    fn period_options_are_distinct_and_descending() {
        let (_, p) = sample();
        assert_eq!(period_options(&p), vec!["all", "2024-2025", "2023-2024"]);
        assert_eq!(period_options(&[]), vec!["all"]);
    }

    #[test]
    fn jabatan_rows_carry_delete_guard() {
        let (j, p) = sample();
        let mut extra = j.clone();
        extra.push(jabatan(5, "Bendahara", 3));

        let rows = filter_jabatan(&extra, &p, None);
        let urutan: Vec<i32> = rows.iter().map(|r| r.jabatan.urutan).collect();
        assert_eq!(urutan, vec![1, 2, 3, 9]);

        let sekretaris = rows.iter().find(|r| r.jabatan.id == 2).unwrap();
        assert_eq!(sekretaris.member_count, 2);
        assert!(!sekretaris.can_delete);
        let bendahara = rows.iter().find(|r| r.jabatan.id == 5).unwrap();
        assert!(bendahara.can_delete);

        let rows = filter_jabatan(&extra, &p, Some("DIVISI"));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn public_search_is_a_subset_and_empty_query_is_a_no_op() {
        let (j, mut p) = sample();
        p[0].jabatan_pengurus = Some("Koordinator Lapangan".into());
        let refs: Vec<&Pengurus> = p.iter().collect();

        assert_eq!(ids(&search_public(&refs, &j, "")), vec![1, 2, 3, 4]);
        assert_eq!(ids(&search_public(&refs, &j, "  ")), vec![1, 2, 3, 4]);
        assert_eq!(ids(&search_public(&refs, &j, "koordinator")), vec![1]);
        assert_eq!(ids(&search_public(&refs, &j, "ketua umum")), vec![1]);
        assert_eq!(ids(&search_public(&refs, &j, "EKO")), vec![4]);

        for q in ["a", "di", "sekretaris", "x"] {
            let hits = search_public(&refs, &j, q);
            assert!(hits.iter().all(|h| refs.iter().any(|r| r.id == h.id)));
        }
    }
}
