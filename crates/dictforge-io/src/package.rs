use std::fs::{self, File};
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use dictforge_core::{ConvertError, DictionaryArchive, Result};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writes a dictionary archive as a deflated zip file.
#[derive(Debug, Clone, Copy)]
pub struct ZipPackager {
    options: SimpleFileOptions,
}

impl Default for ZipPackager {
    fn default() -> Self {
        Self {
            options: SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }
}

impl ZipPackager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn package<W: Write + Seek>(&self, archive: &DictionaryArchive, writer: W) -> Result<W> {
        let mut zip = ZipWriter::new(writer);

        for file in archive.files() {
            zip.start_file(file.name.as_str(), self.options)
                .map_err(|e| ConvertError::Archive(e.to_string()))?;
            zip.write_all(&file.bytes)?;
        }

        zip.finish().map_err(|e| ConvertError::Archive(e.to_string()))
    }

    /// Write the archive to `path`. Nothing is left at `path` if writing fails.
    pub fn package_to_path(&self, archive: &DictionaryArchive, path: &Path) -> Result<()> {
        let partial = partial_path(path);

        let written = File::create(&partial)
            .map_err(ConvertError::from)
            .and_then(|file| self.package(archive, file))
            .and_then(|file| file.sync_all().map_err(ConvertError::from));

        if let Err(e) = written {
            let _ = fs::remove_file(&partial);
            return Err(e);
        }

        if let Err(e) = fs::rename(&partial, path) {
            let _ = fs::remove_file(&partial);
            return Err(e.into());
        }

        tracing::info!("Wrote {} files to {}", archive.files().len(), path.display());
        Ok(())
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    use serde_json::json;

    #[test]
    fn test_archive_round_trip() {
        let mut archive = DictionaryArchive::new();
        archive.add_json("index.json", &json!({ "title": "CantoDict" })).unwrap();
        archive.add_json("term_bank_1.json", &json!([["例子", "lai6 zi2"]])).unwrap();

        let cursor = ZipPackager::new()
            .package(&archive, Cursor::new(Vec::new()))
            .unwrap();

        let mut zip = zip::ZipArchive::new(Cursor::new(cursor.into_inner())).unwrap();
        assert_eq!(zip.len(), 2);

        let mut contents = String::new();
        zip.by_name("term_bank_1.json")
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, r#"[["例子","lai6 zi2"]]"#);
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dictforge-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn sample_archive() -> DictionaryArchive {
        let mut archive = DictionaryArchive::new();
        archive.add_json("index.json", &json!({ "title": "CantoDict" })).unwrap();
        archive
    }

    #[test]
    fn test_package_to_path_writes_archive() {
        let dir = scratch_dir("write");
        let target = dir.join("out.zip");

        ZipPackager::new()
            .package_to_path(&sample_archive(), &target)
            .unwrap();

        let zip = zip::ZipArchive::new(File::open(&target).unwrap()).unwrap();
        assert_eq!(zip.len(), 1);
        assert!(!partial_path(&target).exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_failed_rename_leaves_no_partial_file() {
        let dir = scratch_dir("rename");
        let target = dir.join("out.zip");
        // a non-empty directory cannot be replaced by a file
        fs::create_dir_all(target.join("occupied")).unwrap();

        let result = ZipPackager::new().package_to_path(&sample_archive(), &target);

        assert!(result.is_err());
        assert!(!partial_path(&target).exists());
        assert!(target.is_dir());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_partial_path_sits_beside_target() {
        let path = Path::new("out/[Cantonese] CantoDict.zip");
        assert_eq!(
            partial_path(path),
            PathBuf::from("out/[Cantonese] CantoDict.zip.partial")
        );
    }
}
