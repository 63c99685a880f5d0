use std::collections::HashMap;

use dictforge_core::EntryKey;

use crate::entry::{CantoDictEntry, EntryKind};

/// Entries addressable by `(kind, id)`.
///
/// Iteration follows the position where each key first appeared in the
/// table. A later row with the same key replaces the earlier entry in place.
#[derive(Debug, Default)]
pub struct EntryIndex {
    entries: Vec<CantoDictEntry>,
    positions: HashMap<EntryKey, usize>,
}

impl EntryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the one it replaced
    pub fn insert(&mut self, entry: CantoDictEntry) -> Option<CantoDictEntry> {
        let key = entry.key();
        match self.positions.get(&key) {
            Some(&idx) => {
                tracing::debug!("Duplicate entry {key}, keeping the later row");
                Some(std::mem::replace(&mut self.entries[idx], entry))
            }
            None => {
                self.positions.insert(key, self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn get(&self, key: &EntryKey) -> Option<&CantoDictEntry> {
        self.positions.get(key).and_then(|&idx| self.entries.get(idx))
    }

    /// Resolve a reference to an entry of the given kind
    pub fn resolve(&self, kind: &EntryKind, id: &str) -> Option<&CantoDictEntry> {
        self.get(&EntryKey::new(kind.as_str(), id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CantoDictEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CantoDictEntry> for EntryIndex {
    fn from_iter<I: IntoIterator<Item = CantoDictEntry>>(iter: I) -> Self {
        let mut index = EntryIndex::new();
        for entry in iter {
            index.insert(entry);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures::entry;

    #[test]
    fn test_same_id_different_kind_coexist() {
        let index: EntryIndex = [
            entry(EntryKind::Compound, "1", "一齊"),
            entry(EntryKind::Sentence, "1", "一齊去。"),
        ]
        .into_iter()
        .collect();

        assert_eq!(index.len(), 2);
        assert_eq!(index.resolve(&EntryKind::Sentence, "1").unwrap().chinese, "一齊去。");
        assert!(index.resolve(&EntryKind::Character, "1").is_none());
    }

    #[test]
    fn test_duplicate_key_last_write_wins_first_position() {
        let mut index = EntryIndex::new();
        index.insert(entry(EntryKind::Compound, "1", "first"));
        index.insert(entry(EntryKind::Compound, "2", "second"));
        let replaced = index.insert(entry(EntryKind::Compound, "1", "third"));

        assert_eq!(replaced.unwrap().chinese, "first");
        let order: Vec<&str> = index.iter().map(|e| e.chinese.as_str()).collect();
        assert_eq!(order, ["third", "second"]);
    }
}
