// src/organization/composite.rs
//! Division and BPH entries keep their sub-members inside `pengurus.nama`:
//!
//! - division: `Ketua Divisi : <leader> Anggota : <m1>     <m2>`
//! - BPH: `Ketua : <a> Wakil Ketua : <b> Sekretaris : <c> Bendahara : <d>`
//!
//! Parsing never fails; text without any recognised label is treated as a plain name.
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::pengurus::EntryKind;

/// Members of a division are joined with five spaces.
pub const MEMBER_SEPARATOR: &str = "     ";

static DIVISION_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(ketua(?:\s*divisi)?|anggota)\s*:").expect("valid regex"));

static BPH_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(wakil\s*ketua|ketua|sekretaris|bendahara)\s*:").expect("valid regex")
});

static MEMBER_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\n]+|\s{2,}").expect("valid regex"));

static INPUT_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,\n]").expect("valid regex"));

/// Splits the admin textarea on commas and newlines.
pub fn split_members_input(raw: &str) -> Vec<String> {
    INPUT_SPLIT
        .split(raw)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns an empty string when both leader and members are blank.
pub fn compose_division(ketua: &str, anggota_raw: &str) -> String {
    let ketua = ketua.trim();
    let members = split_members_input(anggota_raw).join(MEMBER_SEPARATOR);

    let mut parts = Vec::with_capacity(2);
    if !ketua.is_empty() {
        parts.push(format!("Ketua Divisi : {}", ketua));
    }
    if !members.is_empty() {
        parts.push(format!("Anggota : {}", members));
    }
    parts.join(" ")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BphRoles {
    pub ketua: String,
    pub wakil_ketua: String,
    pub sekretaris: String,
    pub bendahara: String,
}

impl BphRoles {
    fn labelled(&self) -> [(&'static str, &str); 4] {
        [
            ("Ketua", self.ketua.trim()),
            ("Wakil Ketua", self.wakil_ketua.trim()),
            ("Sekretaris", self.sekretaris.trim()),
            ("Bendahara", self.bendahara.trim()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.labelled().iter().all(|(_, v)| v.is_empty())
    }

    pub fn compose(&self) -> String {
        self.labelled()
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(label, v)| format!("{} : {}", label, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivisionName {
    pub leader: String,
    pub members: Vec<String>,
}

/// Label/value pairs in order of appearance; text before the first label is dropped.
fn labelled_segments<'t>(re: &Regex, text: &'t str) -> Vec<(String, &'t str)> {
    let matches: Vec<_> = re.captures_iter(text).collect();
    let mut out = Vec::with_capacity(matches.len());
    for (i, caps) in matches.iter().enumerate() {
        let (Some(whole), Some(label)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let end = matches
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(text.len());
        let label = label
            .as_str()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        out.push((label, text[whole.end()..end].trim()));
    }
    out
}

fn split_members(tail: &str) -> Vec<String> {
    MEMBER_SPLIT
        .split(tail.trim())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_division(text: &str) -> Option<DivisionName> {
    let segments = labelled_segments(&DIVISION_LABEL, text);
    if segments.is_empty() {
        return None;
    }

    let mut leader = None;
    let mut members = None;
    for (label, value) in segments {
        if label.starts_with("ketua") {
            leader.get_or_insert_with(|| value.to_string());
        } else {
            members.get_or_insert_with(|| split_members(value));
        }
    }

    Some(DivisionName {
        leader: leader.unwrap_or_default(),
        members: members.unwrap_or_default(),
    })
}

pub fn parse_bph(text: &str) -> Option<BphRoles> {
    let segments = labelled_segments(&BPH_LABEL, text);
    if segments.is_empty() {
        return None;
    }

    let mut roles = BphRoles::default();
    for (label, value) in segments {
        let slot = match label.as_str() {
            "ketua" => &mut roles.ketua,
            "sekretaris" => &mut roles.sekretaris,
            "bendahara" => &mut roles.bendahara,
            _ => &mut roles.wakil_ketua,
        };
        if slot.is_empty() {
            *slot = value.to_string();
        }
    }
    Some(roles)
}

/// Presentational overlay for a card: who leads and who else belongs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Overlay {
    pub leader: String,
    pub members: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bph: Option<BphRoles>,
}

impl Overlay {
    pub fn raw(text: &str) -> Self {
        Overlay {
            leader: text.trim().to_string(),
            ..Overlay::default()
        }
    }
}

/// `None` when the text carries no label for its kind.
pub fn try_overlay(kind: EntryKind, text: &str) -> Option<Overlay> {
    match kind {
        EntryKind::Divisi => parse_division(text).map(|d| Overlay {
            leader: d.leader,
            members: d.members,
            bph: None,
        }),
        EntryKind::Bph => parse_bph(text).map(|roles| Overlay {
            leader: roles.ketua.clone(),
            members: [&roles.wakil_ketua, &roles.sekretaris, &roles.bendahara]
                .into_iter()
                .filter(|v| !v.is_empty())
                .cloned()
                .collect(),
            bph: Some(roles),
        }),
        EntryKind::Individual => None,
    }
}

pub fn overlay_for(kind: EntryKind, text: &str) -> Overlay {
    try_overlay(kind, text).unwrap_or_else(|| Overlay::raw(text))
}

/// Helper values for the admin edit form, recovered from a stored name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompositeFormFields {
    pub ketua_divisi: String,
    pub anggota_divisi: String,
    pub bph: BphRoles,
}

pub fn form_fields(kind: EntryKind, text: &str) -> CompositeFormFields {
    match kind {
        EntryKind::Divisi => parse_division(text)
            .map(|d| CompositeFormFields {
                ketua_divisi: d.leader,
                anggota_divisi: d.members.join(", "),
                ..CompositeFormFields::default()
            })
            .unwrap_or_default(),
        EntryKind::Bph => CompositeFormFields {
            bph: parse_bph(text).unwrap_or_default(),
            ..CompositeFormFields::default()
        },
        EntryKind::Individual => CompositeFormFields::default(),
    }
}
