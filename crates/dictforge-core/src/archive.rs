use serde::Serialize;

use crate::error::Result;

/// A file to be placed in the distributable archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Ordered mapping of output file name to serialized document.
#[derive(Debug, Clone, Default)]
pub struct DictionaryArchive {
    files: Vec<ArchiveFile>,
}

impl DictionaryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize `document` as JSON under `name`, replacing any file of the same name.
    pub fn add_json<T: Serialize + ?Sized>(&mut self, name: &str, document: &T) -> Result<()> {
        let bytes = serde_json::to_vec(document)?;
        match self.files.iter_mut().find(|file| file.name == name) {
            Some(file) => file.bytes = bytes,
            None => self.files.push(ArchiveFile {
                name: name.to_string(),
                bytes,
            }),
        }
        Ok(())
    }

    pub fn files(&self) -> &[ArchiveFile] {
        &self.files
    }

    pub fn get(&self, name: &str) -> Option<&ArchiveFile> {
        self.files.iter().find(|file| file.name == name)
    }
}
