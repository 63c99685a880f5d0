use dictforge_config::cantodict::CantoDictConfig;
use dictforge_core::{
    DictionaryIndex, DictionarySource, RawRow, ReferenceObserver, Result, TermBank,
};

use crate::bank::assemble_term_bank;
use crate::decoder::FieldDecoder;
use crate::entry::CantoDictEntry;
use crate::index::EntryIndex;
use crate::manifest::build_manifest;
use crate::synthesizer::TermSynthesizer;

/// CantoDict export, decoded and indexed
pub struct CantoDict {
    config: CantoDictConfig,
    index: EntryIndex,
}

impl CantoDict {
    /// Decode and index raw table rows. Fails on the first malformed row.
    pub fn from_rows<I>(rows: I, config: CantoDictConfig) -> Result<Self>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let decoder = FieldDecoder::new(&config);
        let mut index = EntryIndex::new();
        let mut row_count = 0;

        for (i, raw) in rows.into_iter().enumerate() {
            let row = decoder.decode(i + 1, raw)?;
            index.insert(CantoDictEntry::from_row(&row)?);
            row_count += 1;
        }

        tracing::info!("Indexed {} entries from {} rows", index.len(), row_count);
        Ok(Self { config, index })
    }

    pub fn entry_count(&self) -> usize {
        self.index.len()
    }

    pub fn entries(&self) -> &EntryIndex {
        &self.index
    }

    pub fn config(&self) -> &CantoDictConfig {
        &self.config
    }
}

impl DictionarySource for CantoDict {
    fn index(&self) -> DictionaryIndex {
        build_manifest()
    }

    fn term_bank(&self, observer: &dyn ReferenceObserver) -> TermBank {
        let synthesizer = TermSynthesizer::new(&self.config, &self.index).with_observer(observer);
        assemble_term_bank(&self.index, &synthesizer)
    }
}
