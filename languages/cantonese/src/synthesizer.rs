//! Builds term-bank records and their structured-content glossary.
//!
//! Glossary sections always appear in this order:
//! headword, definitions, notes, compounds, sentences.
//! The notes slot is kept with [`DocumentNode::Empty`] when an entry has no
//! note. Compounds and sentences are only appended when the entry lists
//! references of that kind at all.

use std::sync::Arc;

use dictforge_config::cantodict::CantoDictConfig;
use dictforge_core::{
    DocumentNode, Element, EntryKey, Glossary, ReferenceObserver, SilentObserver, Style, Tag,
    TermRecord,
};
use serde_json::Number;

use crate::entry::{CantoDictEntry, EntryKind};
use crate::index::EntryIndex;

/// `data` attribute key marking each part of the glossary
pub const DATA_KEY: &str = "cantodict";

const SEPARATOR: &str = "・";
const HEADWORD_SIZE: &str = "150%";
const TRANSLATION_SIZE: &str = "80%";
const NOTE_MARKER: &str = "\"📝 \"";

pub struct TermSynthesizer<'a> {
    config: &'a CantoDictConfig,
    index: &'a EntryIndex,
    observer: &'a dyn ReferenceObserver,
}

impl<'a> TermSynthesizer<'a> {
    pub fn new(config: &'a CantoDictConfig, index: &'a EntryIndex) -> Self {
        Self {
            config,
            index,
            observer: &SilentObserver,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn ReferenceObserver) -> Self {
        self.observer = observer;
        self
    }

    /// One record for the entry itself, then one per variant spelling.
    /// All records share the same glossary.
    pub fn synthesize(&self, entry: &CantoDictEntry) -> Vec<TermRecord> {
        debug_assert!(entry.kind.is_term(), "{} is not a term entry", entry.kind);

        let primary = TermRecord {
            term: entry.chinese.clone(),
            reading: entry.readings.get(self.config.reading_scheme).to_string(),
            definition_tags: entry.pos.join(" "),
            rules: String::new(),
            score: entry.frequency.clone().unwrap_or_else(|| Number::from(0)),
            glossary: Arc::new(self.glossary(entry)),
            sequence: 0,
            term_tags: entry.dialect.clone().unwrap_or_default(),
        };

        let variants: Vec<TermRecord> = entry
            .variants
            .iter()
            .map(|variant| primary.with_term(variant.clone()))
            .collect();

        let mut records = Vec::with_capacity(1 + variants.len());
        records.push(primary);
        records.extend(variants);
        records
    }

    pub fn glossary(&self, entry: &CantoDictEntry) -> Glossary {
        let mut glossary = Glossary::default();
        glossary.push(self.headword(entry));
        glossary.push(self.definitions(entry));
        glossary.push(self.notes(entry));

        if !entry.compound_refs.is_empty() {
            glossary.push(self.compounds(entry));
        }
        if !entry.sentence_refs.is_empty() {
            glossary.push(self.sentences(entry));
        }

        glossary
    }

    fn headword(&self, entry: &CantoDictEntry) -> Element {
        let variants: DocumentNode = if entry.variants.is_empty() {
            DocumentNode::Empty
        } else {
            Element::new(Tag::Span)
                .text(format!("{SEPARATOR}{}", entry.variants.join(SEPARATOR)))
                .style(Style::font_size(HEADWORD_SIZE))
                .data(DATA_KEY, "variants")
                .into()
        };

        Element::new(Tag::Span)
            .data(DATA_KEY, "headword")
            .children(vec![
                bracket("【"),
                Element::new(Tag::Span)
                    .text(&entry.chinese)
                    .style(Style::font_size(HEADWORD_SIZE))
                    .data(DATA_KEY, "chinese")
                    .into(),
                variants,
                bracket("】"),
                Element::new(Tag::Span)
                    .text(entry.readings.composite())
                    .data(DATA_KEY, "readings")
                    .into(),
            ])
            .lang(&self.config.source_lang)
    }

    fn definitions(&self, entry: &CantoDictEntry) -> Element {
        let items: Vec<DocumentNode> = entry
            .definition
            .split('\n')
            .map(|line| Element::new(Tag::Li).text(line).into())
            .collect();

        Element::new(Tag::Ul)
            .data(DATA_KEY, "definition")
            .children(items)
            .style(Style::list_style("circle"))
            .lang(&self.config.source_lang)
    }

    fn notes(&self, entry: &CantoDictEntry) -> DocumentNode {
        match &entry.notes {
            Some(note) => Element::new(Tag::Ul)
                .data(DATA_KEY, "notes")
                .children(vec![Element::new(Tag::Li).text(note).into()])
                .style(Style::list_style(NOTE_MARKER))
                .lang(&self.config.source_lang)
                .into(),
            None => DocumentNode::Empty,
        }
    }

    fn compounds(&self, entry: &CantoDictEntry) -> Element {
        let mut links: Vec<DocumentNode> = Vec::new();
        for compound in self.resolve_all(entry, &EntryKind::Compound, &entry.compound_refs) {
            links.push(
                Element::new(Tag::A)
                    .href(format!("?query={}&wildcards=off", compound.chinese))
                    .text(&compound.chinese)
                    .into(),
            );
            links.push(Element::new(Tag::Span).text(SEPARATOR).into());
        }
        // trailing separator
        links.pop();

        Element::new(Tag::Div)
            .data(DATA_KEY, "compounds")
            .children(links)
            .lang(&self.config.source_lang)
    }

    fn sentences(&self, entry: &CantoDictEntry) -> Element {
        let mut items: Vec<DocumentNode> = Vec::new();
        for sentence in self.resolve_all(entry, &EntryKind::Sentence, &entry.sentence_refs) {
            items.push(Element::new(Tag::Li).text(&sentence.chinese).into());
            items.push(
                Element::new(Tag::Li)
                    .text(&sentence.definition)
                    .lang(&self.config.translation_lang)
                    .style(Style::font_size(TRANSLATION_SIZE).with_list_style("none"))
                    .into(),
            );
        }

        Element::new(Tag::Ul)
            .data(DATA_KEY, "sentences")
            .children(items)
            .style(Style::list_style("square"))
            .lang(&self.config.source_lang)
    }

    /// Referenced entries that exist, in reference order
    fn resolve_all<'e>(
        &'e self,
        referrer: &'e CantoDictEntry,
        kind: &'e EntryKind,
        ids: &'e [String],
    ) -> impl Iterator<Item = &'a CantoDictEntry> + 'e {
        ids.iter().filter_map(move |id| {
            let found = self.index.resolve(kind, id);
            if found.is_none() {
                let target = EntryKey::new(kind.as_str(), id.clone());
                self.observer.dangling(&referrer.key(), &target);
            }
            found
        })
    }
}

fn bracket(glyph: &str) -> DocumentNode {
    Element::new(Tag::Span)
        .text(glyph)
        .style(Style::font_size(HEADWORD_SIZE))
        .into()
}
