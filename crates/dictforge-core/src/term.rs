use std::sync::Arc;

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};
use serde_json::Number;

use crate::structured::Glossary;

/// One row of a term bank, serialized as the 8-element array
/// `[term, reading, definitionTags, rules, score, [glossary], sequence, termTags]`.
#[derive(Debug, Clone)]
pub struct TermRecord {
    pub term: String,
    pub reading: String,
    pub definition_tags: String,
    pub rules: String,
    pub score: Number,
    pub glossary: Arc<Glossary>,
    pub sequence: i64,
    pub term_tags: String,
}

impl TermRecord {
    /// Copy of this record looked up under another surface form.
    /// The glossary is shared, not cloned.
    pub fn with_term(&self, term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..self.clone()
        }
    }
}

impl Serialize for TermRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(8)?;
        tuple.serialize_element(&self.term)?;
        tuple.serialize_element(&self.reading)?;
        tuple.serialize_element(&self.definition_tags)?;
        tuple.serialize_element(&self.rules)?;
        tuple.serialize_element(&self.score)?;
        tuple.serialize_element(&[self.glossary.as_ref()])?;
        tuple.serialize_element(&self.sequence)?;
        tuple.serialize_element(&self.term_tags)?;
        tuple.end()
    }
}

/// Ordered term records for a single `term_bank_*.json` file.
pub type TermBank = Vec<TermRecord>;
