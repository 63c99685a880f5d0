use serde::{Deserialize, Serialize};

fn default_csv_path() -> String {
    "cantonese/cantodict/cantodict.csv".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SourceConfig {
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
        }
    }
}
