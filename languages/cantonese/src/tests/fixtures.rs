use dictforge_core::RawRow;

use crate::entry::{CantoDictEntry, EntryKind, Readings};

pub fn entry(kind: EntryKind, id: &str, chinese: &str) -> CantoDictEntry {
    CantoDictEntry {
        kind,
        id: id.to_string(),
        chinese: chinese.to_string(),
        readings: Readings {
            jyutping: "jp".to_string(),
            yale: "yl".to_string(),
            pinyin: "py".to_string(),
        },
        pos: vec![],
        definition: String::new(),
        notes: None,
        variants: vec![],
        compound_refs: vec![],
        sentence_refs: vec![],
        character_refs: vec![],
        frequency: None,
        dialect: None,
        similar: None,
        flags: None,
    }
}

pub fn compound(id: &str, chinese: &str) -> CantoDictEntry {
    entry(EntryKind::Compound, id, chinese)
}

pub fn sentence(id: &str, chinese: &str, translation: &str) -> CantoDictEntry {
    CantoDictEntry {
        definition: translation.to_string(),
        ..entry(EntryKind::Sentence, id, chinese)
    }
}

pub fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

/// Raw table row with every CantoDict column present
pub fn raw_row(pairs: &[(&str, &str)]) -> RawRow {
    let mut row: RawRow = [
        "entry_type",
        "cantodict_id",
        "chinese",
        "jyutping",
        "yale",
        "pinyin",
        "pos",
        "definition",
        "notes",
        "variants",
        "similar",
        "flag",
        "compound_cantodictids",
        "sentence_cantodictids",
        "character_cantodictids",
        "google_frequency",
        "dialect",
    ]
    .iter()
    .map(|column| (column.to_string(), String::new()))
    .collect();

    for (column, value) in pairs {
        row.insert(column.to_string(), value.to_string());
    }
    row
}
