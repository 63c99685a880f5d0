pub mod bank;
pub mod decoder;
pub mod dictionary;
pub mod entry;
pub mod index;
pub mod manifest;
pub mod synthesizer;

#[cfg(test)]
mod tests;

pub use bank::assemble_term_bank;
pub use decoder::{DecodedRow, FieldDecoder, FieldValue};
pub use dictionary::CantoDict;
pub use entry::{CantoDictEntry, EntryKind, Readings};
pub use index::EntryIndex;
pub use manifest::{build_manifest, build_manifest_at};
pub use synthesizer::TermSynthesizer;
