pub mod archive;
pub mod dictionary;
pub mod error;
pub mod reference;
pub mod structured;
pub mod table;
pub mod term;

pub use archive::{ArchiveFile, DictionaryArchive};
pub use dictionary::{DictionaryIndex, DictionarySource, FrequencyMode, KanjiRecord};
pub use error::{ConvertError, Result};
pub use reference::{
    CollectingObserver, EntryKey, ReferenceObserver, SilentObserver, TracingObserver,
};
pub use structured::{Content, DocumentNode, Element, Glossary, Style, Tag};
pub use table::RawRow;
pub use term::{TermBank, TermRecord};
