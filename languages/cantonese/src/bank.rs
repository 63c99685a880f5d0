use dictforge_core::TermBank;

use crate::index::EntryIndex;
use crate::synthesizer::TermSynthesizer;

/// Term records for every compound and character entry, in index order.
///
/// Sentences and other kinds are only reachable as cross-references.
pub fn assemble_term_bank(index: &EntryIndex, synthesizer: &TermSynthesizer<'_>) -> TermBank {
    let bank: TermBank = index
        .iter()
        .filter(|entry| entry.kind.is_term())
        .flat_map(|entry| synthesizer.synthesize(entry))
        .collect();

    tracing::info!("Assembled {} term records from {} entries", bank.len(), index.len());
    bank
}
