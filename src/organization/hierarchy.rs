// src/organization/hierarchy.rs
use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::composite::{Overlay, overlay_for, try_overlay};
use super::filter::search_public;
use super::slider::Slider;
use crate::models::pengurus::{EntryKind, Pengurus};
use crate::models::struktur_jabatan::StrukturJabatan;

/// Rank used for members whose position cannot be resolved.
pub const MISSING_URUTAN: i32 = 999;

const MAX_CARD_IMAGES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Row1,
    Row2,
    Row3,
    Division,
}

pub fn tier_for(urutan: i32) -> Option<Tier> {
    match urutan {
        1 => Some(Tier::Row1),
        2..=3 => Some(Tier::Row2),
        4..=8 => Some(Tier::Row3),
        u if u >= 9 => Some(Tier::Division),
        _ => None,
    }
}

/// `periodes` must already be sorted newest first.
pub fn active_periode(periodes: &[String], requested: Option<&str>, current_year: i32) -> String {
    if let Some(req) = requested.map(str::trim).filter(|r| !r.is_empty()) {
        return req.to_string();
    }
    let current = format!("{}-{}", current_year, current_year + 1);
    if periodes.iter().any(|p| *p == current) {
        return current;
    }
    periodes.first().cloned().unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonTile {
    pub id: i64,
    pub nama: String,
    pub nama_jabatan: String,
    pub urutan: i32,
    pub jabatan_pengurus: Option<String>,
    pub asal_pikr: Option<String>,
    pub instagram: Option<String>,
    pub image_url: Option<String>,
}

impl PersonTile {
    fn new(p: &Pengurus, jabatan: &StrukturJabatan) -> Self {
        PersonTile {
            id: p.id,
            nama: p.nama.clone(),
            nama_jabatan: jabatan.nama_jabatan.clone(),
            urutan: jabatan.urutan,
            jabatan_pengurus: p.jabatan_pengurus.clone(),
            asal_pikr: p.asal_pikr.clone(),
            instagram: p.instagram.clone(),
            image_url: p.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionCard {
    pub jabatan_id: i64,
    pub title: String,
    pub urutan: i32,
    pub kind: EntryKind,
    pub members: Vec<PersonTile>,
    pub images: Vec<String>,
    pub overlay: Overlay,
    pub slider: Slider,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyView {
    pub periode: String,
    pub periodes: Vec<String>,
    pub total: usize,
    pub row1: Vec<PersonTile>,
    pub row2: Vec<PersonTile>,
    pub row3: Vec<PersonTile>,
    pub divisions: Vec<DivisionCard>,
}

pub fn avatar_url(nama: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=random&size=512",
        urlencoding::encode(nama.trim())
    )
}

fn card_images(members: &[&Pengurus]) -> Vec<String> {
    let Some(first) = members.first() else {
        return Vec::new();
    };
    let own: Vec<String> = first.images.urls().into_iter().map(str::to_string).collect();
    if !own.is_empty() {
        return own;
    }
    members
        .iter()
        .take(MAX_CARD_IMAGES)
        .map(|m| match m.image_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => avatar_url(&m.nama),
        })
        .collect()
}

fn card_overlay(kind: EntryKind, members: &[&Pengurus]) -> Overlay {
    let Some(first) = members.first() else {
        return Overlay::default();
    };
    // older data stored one row per division member
    if members.len() > 1 && try_overlay(kind, &first.nama).is_none() {
        return Overlay {
            leader: first.nama.trim().to_string(),
            members: members[1..].iter().map(|m| m.nama.trim().to_string()).collect(),
            bph: None,
        };
    }
    overlay_for(kind, &first.nama)
}

fn division_card(jabatan: &StrukturJabatan, members: &[&Pengurus]) -> DivisionCard {
    let kind = members
        .first()
        .map(|m| m.resolve_kind(Some(jabatan)))
        .unwrap_or(EntryKind::Divisi);
    let images = card_images(members);
    DivisionCard {
        jabatan_id: jabatan.id,
        title: jabatan.nama_jabatan.clone(),
        urutan: jabatan.urutan,
        kind,
        members: members.iter().map(|m| PersonTile::new(m, jabatan)).collect(),
        overlay: card_overlay(kind, members),
        slider: Slider::new(images.len()),
        images,
    }
}

pub fn build_hierarchy(
    pengurus: &[Pengurus],
    jabatan: &[StrukturJabatan],
    requested: Option<&str>,
    query: &str,
    current_year: i32,
) -> HierarchyView {
    let public: Vec<&Pengurus> = pengurus.iter().filter(|p| p.is_public()).collect();

    let distinct: BTreeSet<&str> = public
        .iter()
        .map(|p| p.periode.as_str())
        .filter(|p| !p.trim().is_empty())
        .collect();
    let periodes: Vec<String> = distinct.into_iter().rev().map(str::to_string).collect();
    let periode = active_periode(&periodes, requested, current_year);

    let mut active: Vec<&Pengurus> = public
        .into_iter()
        .filter(|p| p.periode == periode)
        .collect();
    active.sort_by_key(|p| p.jabatan(jabatan).map_or(MISSING_URUTAN, |j| j.urutan));
    let visible = search_public(&active, jabatan, query);

    let mut view = HierarchyView {
        periode,
        periodes,
        total: visible.len(),
        row1: Vec::new(),
        row2: Vec::new(),
        row3: Vec::new(),
        divisions: Vec::new(),
    };

    let mut groups: Vec<(&StrukturJabatan, Vec<&Pengurus>)> = Vec::new();
    let mut group_index: HashMap<i64, usize> = HashMap::new();

    for p in visible {
        let Some(j) = p.jabatan(jabatan) else {
            continue;
        };
        match tier_for(j.urutan) {
            Some(Tier::Row1) => view.row1.push(PersonTile::new(p, j)),
            Some(Tier::Row2) => view.row2.push(PersonTile::new(p, j)),
            Some(Tier::Row3) => view.row3.push(PersonTile::new(p, j)),
            Some(Tier::Division) => {
                let idx = *group_index.entry(j.id).or_insert_with(|| {
                    groups.push((j, Vec::new()));
                    groups.len() - 1
                });
                groups[idx].1.push(p);
            }
            None => {}
        }
    }

    groups.sort_by_key(|(j, _)| j.urutan);
    view.divisions = groups
        .iter()
        .map(|(j, members)| division_card(j, members))
        .collect();
    view
}
