use serde::{Deserialize, Serialize};

fn default_archive_path() -> String {
    "[Cantonese] CantoDict.zip".to_string()
}

fn default_index_file() -> String {
    "index.json".to_string()
}

fn default_term_bank_file() -> String {
    "term_bank_1.json".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(default = "default_archive_path")]
    pub archive_path: String,
    /// File name of the manifest inside the archive
    #[serde(default = "default_index_file")]
    pub index_file: String,
    #[serde(default = "default_term_bank_file")]
    pub term_bank_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            archive_path: default_archive_path(),
            index_file: default_index_file(),
            term_bank_file: default_term_bank_file(),
        }
    }
}
