use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::cantodict::CantoDictConfig;
use self::output::OutputConfig;
use self::source::SourceConfig;

pub mod cantodict;
pub mod output;
pub mod source;

pub use cantodict::ReadingScheme;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub output: OutputConfig,
    pub cantodict: CantoDictConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Load a JSON profile; missing sections and fields fall back to defaults
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&data)?;
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(path) = env::var("DICTFORGE_CSV_PATH") {
            self.source.csv_path = path;
        }

        if let Ok(path) = env::var("DICTFORGE_ARCHIVE_PATH") {
            self.output.archive_path = path;
        }

        if let Some(scheme) = env::var("DICTFORGE_READING_SCHEME")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.cantodict.reading_scheme = scheme;
        }

        if let Some(report) = env::var("DICTFORGE_REPORT_DANGLING")
            .ok()
            .and_then(|v| parse_flag(&v))
        {
            self.cantodict.report_dangling_refs = report;
        }
    }
}

/// Accepts `true/false`, `1/0`, `yes/no` and `on/off`
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "cantodict": { "reading_scheme": "yale" } }"#).unwrap();
        assert_eq!(config.cantodict.reading_scheme, ReadingScheme::Yale);
        assert_eq!(config.cantodict.source_lang, "zh-HK");
        assert!(config.cantodict.is_structured("compound_cantodictids"));
        assert!(!config.cantodict.is_structured("definition"));
        assert_eq!(config.output.term_bank_file, "term_bank_1.json");
    }

    #[test]
    fn test_reading_scheme_from_str() {
        assert_eq!("Pinyin".parse::<ReadingScheme>(), Ok(ReadingScheme::Pinyin));
        assert!("wade-giles".parse::<ReadingScheme>().is_err());
    }

    #[test]
    fn test_parse_flag_forms() {
        for on in ["1", "yes", "TRUE", " on "] {
            assert_eq!(parse_flag(on), Some(true), "{on}");
        }
        for off in ["0", "no", "false", "Off"] {
            assert_eq!(parse_flag(off), Some(false), "{off}");
        }
        assert_eq!(parse_flag("maybe"), None);
    }
}
