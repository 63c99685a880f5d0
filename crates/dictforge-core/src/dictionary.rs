use serde::Serialize;

use crate::error::{ConvertError, Result};
use crate::reference::ReferenceObserver;
use crate::term::TermBank;

/// Contents of `index.json`, the dictionary manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryIndex {
    pub title: String,
    pub revision: String,
    pub format: u8,
    pub url: String,
    pub description: String,
    pub author: String,
    pub attribution: String,
    pub frequency_mode: FrequencyMode,
}

/// How the lookup tool interprets term scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrequencyMode {
    OccurrenceBased,
    RankBased,
}

/// Single-character entry of a kanji bank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KanjiRecord {
    pub character: String,
    pub onyomi: String,
    pub kunyomi: String,
    pub tags: String,
    pub meanings: Vec<String>,
}

/// A converted source that can produce dictionary banks.
pub trait DictionarySource {
    /// Manifest describing this dictionary
    fn index(&self) -> DictionaryIndex;

    /// All term records, in source order
    fn term_bank(&self, observer: &dyn ReferenceObserver) -> TermBank;

    /// Character bank with radical and stroke metadata
    fn kanji_bank(&self) -> Result<Vec<KanjiRecord>> {
        Err(ConvertError::Unsupported("kanji bank generation"))
    }
}
