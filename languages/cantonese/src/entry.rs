use std::fmt;

use dictforge_config::ReadingScheme;
use dictforge_core::{EntryKey, Result};
use serde_json::{Number, Value};

use crate::decoder::DecodedRow;

/// Kind of a CantoDict row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Compound,
    Character,
    Sentence,
    Other(String),
}

impl EntryKind {
    pub fn as_str(&self) -> &str {
        match self {
            EntryKind::Compound => "compound",
            EntryKind::Character => "character",
            EntryKind::Sentence => "sentence",
            EntryKind::Other(kind) => kind,
        }
    }

    /// Kinds that produce term-bank records
    pub fn is_term(&self) -> bool {
        matches!(self, EntryKind::Compound | EntryKind::Character)
    }
}

impl From<&str> for EntryKind {
    fn from(kind: &str) -> Self {
        match kind {
            "compound" => EntryKind::Compound,
            "character" => EntryKind::Character,
            "sentence" => EntryKind::Sentence,
            other => EntryKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Readings of an entry in each romanisation scheme
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Readings {
    pub jyutping: String,
    pub yale: String,
    pub pinyin: String,
}

impl Readings {
    pub fn get(&self, scheme: ReadingScheme) -> &str {
        match scheme {
            ReadingScheme::Jyutping => &self.jyutping,
            ReadingScheme::Yale => &self.yale,
            ReadingScheme::Pinyin => &self.pinyin,
        }
    }

    /// All schemes joined by `・`; a missing scheme leaves an empty segment.
    pub fn composite(&self) -> String {
        ReadingScheme::DISPLAY_ORDER
            .iter()
            .map(|scheme| self.get(*scheme))
            .collect::<Vec<_>>()
            .join("・")
    }
}

/// A decoded CantoDict row
#[derive(Debug, Clone, PartialEq)]
pub struct CantoDictEntry {
    pub kind: EntryKind,
    pub id: String,
    pub chinese: String,
    pub readings: Readings,
    pub pos: Vec<String>,
    pub definition: String,
    pub notes: Option<String>,
    pub variants: Vec<String>,
    pub compound_refs: Vec<String>,
    pub sentence_refs: Vec<String>,
    pub character_refs: Vec<String>,
    pub frequency: Option<Number>,
    pub dialect: Option<String>,
    pub similar: Option<Value>,
    pub flags: Option<Value>,
}

impl CantoDictEntry {
    pub fn from_row(row: &DecodedRow) -> Result<Self> {
        Ok(Self {
            kind: EntryKind::from(row.required_text("entry_type")?.as_str()),
            id: row.identifier("cantodict_id")?,
            chinese: row.required_text("chinese")?,
            readings: Readings {
                jyutping: row.optional_text("jyutping")?.unwrap_or_default(),
                yale: row.optional_text("yale")?.unwrap_or_default(),
                pinyin: row.optional_text("pinyin")?.unwrap_or_default(),
            },
            pos: row.string_list("pos")?,
            definition: row.optional_text("definition")?.unwrap_or_default(),
            notes: row.optional_text("notes")?,
            variants: row.string_list("variants")?,
            compound_refs: row.id_list("compound_cantodictids")?,
            sentence_refs: row.id_list("sentence_cantodictids")?,
            character_refs: row.id_list("character_cantodictids")?,
            frequency: row.number("google_frequency")?,
            dialect: row.optional_text("dialect")?,
            similar: row.raw("similar"),
            flags: row.raw("flag"),
        })
    }

    pub fn key(&self) -> EntryKey {
        EntryKey::new(self.kind.as_str(), self.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::FieldDecoder;
    use dictforge_config::cantodict::CantoDictConfig;
    use dictforge_core::RawRow;

    fn decode(pairs: &[(&str, &str)]) -> Result<CantoDictEntry> {
        let config = CantoDictConfig::default();
        let raw: RawRow = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let row = FieldDecoder::new(&config).decode(1, raw)?;
        CantoDictEntry::from_row(&row)
    }

    #[test]
    fn test_full_row() {
        let entry = decode(&[
            ("entry_type", "compound"),
            ("cantodict_id", "5"),
            ("chinese", "例子"),
            ("jyutping", "lai6 zi2"),
            ("yale", "laih jí"),
            ("pinyin", "li4 zi5"),
            ("pos", r#"["n"]"#),
            ("definition", "example\nsample"),
            ("notes", ""),
            ("variants", r#"["例仔"]"#),
            ("compound_cantodictids", "[9]"),
            ("sentence_cantodictids", "[]"),
            ("google_frequency", "1200"),
            ("dialect", "HK"),
        ])
        .unwrap();

        assert_eq!(entry.kind, EntryKind::Compound);
        assert_eq!(entry.key(), EntryKey::new("compound", "5"));
        assert_eq!(entry.readings.composite(), "lai6 zi2・laih jí・li4 zi5");
        assert_eq!(entry.notes, None);
        assert_eq!(entry.variants, ["例仔"]);
        assert_eq!(entry.compound_refs, ["9"]);
        assert!(entry.sentence_refs.is_empty());
        assert_eq!(entry.frequency, Some(Number::from(1200)));
        assert_eq!(entry.dialect.as_deref(), Some("HK"));
    }

    #[test]
    fn test_sparse_sentence_row() {
        let entry = decode(&[
            ("entry_type", "sentence"),
            ("cantodict_id", "12"),
            ("chinese", "呢個係例子。"),
            ("definition", "This is an example."),
        ])
        .unwrap();

        assert_eq!(entry.kind, EntryKind::Sentence);
        assert!(!entry.kind.is_term());
        assert_eq!(entry.readings.composite(), "・・");
        assert!(entry.pos.is_empty());
        assert_eq!(entry.frequency, None);
    }

    #[test]
    fn test_unknown_kind_is_kept() {
        let entry = decode(&[("entry_type", "radical"), ("chinese", "亻")]).unwrap();
        assert_eq!(entry.kind, EntryKind::Other("radical".into()));
        assert_eq!(entry.key().to_string(), "radical,");
    }
}
