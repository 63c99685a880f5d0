use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Romanisation used for the primary reading of each term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingScheme {
    #[default]
    Jyutping,
    Yale,
    Pinyin,
}

impl ReadingScheme {
    /// Order in which schemes appear in the composite readings line.
    pub const DISPLAY_ORDER: [ReadingScheme; 3] =
        [ReadingScheme::Jyutping, ReadingScheme::Yale, ReadingScheme::Pinyin];

    /// Source column holding this scheme's reading
    pub fn column(&self) -> &'static str {
        match self {
            ReadingScheme::Jyutping => "jyutping",
            ReadingScheme::Yale => "yale",
            ReadingScheme::Pinyin => "pinyin",
        }
    }
}

impl fmt::Display for ReadingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for ReadingScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jyutping" => Ok(ReadingScheme::Jyutping),
            "yale" => Ok(ReadingScheme::Yale),
            "pinyin" => Ok(ReadingScheme::Pinyin),
            other => Err(format!("unknown reading scheme `{other}`")),
        }
    }
}

fn default_structured_columns() -> Vec<String> {
    [
        "cantodict_id",
        "similar",
        "variants",
        "pos",
        "flag",
        "compound_cantodictids",
        "sentence_cantodictids",
        "character_cantodictids",
        "google_frequency",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

fn default_source_lang() -> String {
    "zh-HK".to_string()
}

fn default_translation_lang() -> String {
    "en".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CantoDictConfig {
    #[serde(default)]
    pub reading_scheme: ReadingScheme,
    /// Columns whose non-empty values are JSON documents
    #[serde(default = "default_structured_columns")]
    pub structured_columns: Vec<String>,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_translation_lang")]
    pub translation_lang: String,
    /// Warn about cross-references that point at missing entries
    #[serde(default)]
    pub report_dangling_refs: bool,
}

impl CantoDictConfig {
    pub fn is_structured(&self, column: &str) -> bool {
        self.structured_columns.iter().any(|c| c == column)
    }
}

impl Default for CantoDictConfig {
    fn default() -> Self {
        Self {
            reading_scheme: ReadingScheme::default(),
            structured_columns: default_structured_columns(),
            source_lang: default_source_lang(),
            translation_lang: default_translation_lang(),
            report_dangling_refs: false,
        }
    }
}
