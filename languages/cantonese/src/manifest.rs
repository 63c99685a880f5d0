use chrono::{DateTime, SecondsFormat, Utc};
use dictforge_core::{DictionaryIndex, FrequencyMode};

pub const TITLE: &str = "CantoDict";
pub const FORMAT_VERSION: u8 = 3;
pub const SOURCE_URL: &str = "http://www.cantonese.sheik.co.uk/";

const DESCRIPTION: &str = "CantoDict was a Cantonese-English dictionary created and maintained by public contributors. It was abandoned, but the data was archived thanks to awong-dev at https://github.com/awong-dev/cantodict-archive.
Created with https://github.com/MarvNC/yomichan-dictionaries";
const AUTHOR: &str = "CantoDict contributors, Marv";
const ATTRIBUTION: &str = "CantoDict contributors";

/// Manifest stamped with the current time
pub fn build_manifest() -> DictionaryIndex {
    build_manifest_at(Utc::now())
}

pub fn build_manifest_at(now: DateTime<Utc>) -> DictionaryIndex {
    DictionaryIndex {
        title: TITLE.to_string(),
        revision: format!(
            "cantodict_{}",
            now.to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
        format: FORMAT_VERSION,
        url: SOURCE_URL.to_string(),
        description: DESCRIPTION.to_string(),
        author: AUTHOR.to_string(),
        attribution: ATTRIBUTION.to_string(),
        frequency_mode: FrequencyMode::RankBased,
    }
}
