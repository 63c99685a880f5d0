use std::path::PathBuf;

use anyhow::Context;
use dictforge_config::Config;
use dictforge_config::output::OutputConfig;
use dictforge_core::{
    DictionaryArchive, DictionarySource, ReferenceObserver, SilentObserver, TracingObserver,
};
use dictforge_io::{ZipPackager, read_table_file};
use dictforge_lang_cantonese::CantoDict;

/// Read the table, build the dictionary and write the archive
pub async fn run(config: Config) -> anyhow::Result<()> {
    let csv_path = PathBuf::from(&config.source.csv_path);
    let rows = tokio::task::spawn_blocking({
        let csv_path = csv_path.clone();
        move || read_table_file(&csv_path)
    })
    .await?
    .with_context(|| format!("Failed to read {}", csv_path.display()))?;

    let archive_path = PathBuf::from(&config.output.archive_path);
    let archive = build_archive(rows, config)?;

    tokio::task::spawn_blocking({
        let archive_path = archive_path.clone();
        move || ZipPackager::new().package_to_path(&archive, &archive_path)
    })
    .await?
    .with_context(|| format!("Failed to write {}", archive_path.display()))?;

    Ok(())
}

/// Decode, index and synthesize; returns the files to package
pub fn build_archive(
    rows: Vec<dictforge_core::RawRow>,
    config: Config,
) -> anyhow::Result<DictionaryArchive> {
    let Config {
        output, cantodict, ..
    } = config;

    let observer: &dyn ReferenceObserver = if cantodict.report_dangling_refs {
        &TracingObserver
    } else {
        &SilentObserver
    };

    let dict = CantoDict::from_rows(rows, cantodict).context("Failed to decode source table")?;
    let term_bank = dict.term_bank(observer);

    write_files(&dict, &term_bank, &output)
}

fn write_files(
    dict: &CantoDict,
    term_bank: &dictforge_core::TermBank,
    output: &OutputConfig,
) -> anyhow::Result<DictionaryArchive> {
    let mut archive = DictionaryArchive::new();
    archive.add_json(&output.index_file, &dict.index())?;
    archive.add_json(&output.term_bank_file, term_bank)?;
    Ok(archive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dictforge_core::RawRow;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_build_archive_files() {
        let rows = vec![row(&[
            ("entry_type", "compound"),
            ("cantodict_id", "1"),
            ("chinese", "你好"),
            ("jyutping", "nei5 hou2"),
            ("definition", "hello"),
            ("variants", r#"["妳好"]"#),
        ])];

        let archive = build_archive(rows, Config::default()).unwrap();
        let names: Vec<&str> = archive.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["index.json", "term_bank_1.json"]);

        let bank: serde_json::Value =
            serde_json::from_slice(&archive.get("term_bank_1.json").unwrap().bytes).unwrap();
        assert_eq!(bank.as_array().unwrap().len(), 2);
        assert_eq!(bank[1][0], "妳好");
    }

    #[test]
    fn test_malformed_table_builds_nothing() {
        let rows = vec![row(&[
            ("entry_type", "compound"),
            ("chinese", "壞"),
            ("pos", "[n"),
        ])];
        assert!(build_archive(rows, Config::default()).is_err());
    }
}
