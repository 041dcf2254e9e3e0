use std::collections::BTreeMap;

use serde::Deserialize;

use super::table::{AMBIGUOUS_VOWELS, YOON_EXCEPTIONS, YOON_KANA};

/// Raw table data as laid out in `default_romaji.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RomajiTableConfig {
    pub syllables: BTreeMap<String, String>,
    #[serde(default)]
    pub symbols: BTreeMap<String, String>,
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[syllables] table is empty")]
    Empty,
    #[error("empty key in [{0}]")]
    EmptyKey(&'static str),
    #[error("empty value for syllable: {0}")]
    EmptyValue(String),
    #[error("missing syllable required for derived mappings: {0}")]
    MissingSyllable(char),
    #[error("romaji table already initialized")]
    AlreadyInitialized,
}

/// Parse and validate a romaji table TOML document.
pub fn parse_romaji_toml(toml_str: &str) -> Result<RomajiTableConfig, RomajiConfigError> {
    let config: RomajiTableConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.syllables.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    for (section, map) in [
        ("syllables", &config.syllables),
        ("symbols", &config.symbols),
        ("overrides", &config.overrides),
    ] {
        if map.contains_key("") {
            return Err(RomajiConfigError::EmptyKey(section));
        }
    }

    for (key, value) in &config.syllables {
        if value.is_empty() {
            return Err(RomajiConfigError::EmptyValue(key.clone()));
        }
    }

    // Yōon synthesis and the ん rule read these values back out of the tree.
    let required = YOON_KANA
        .iter()
        .copied()
        .chain(YOON_EXCEPTIONS.iter().map(|&(kana, _)| kana))
        .chain(AMBIGUOUS_VOWELS.iter().copied());
    for kana in required {
        let mut buf = [0u8; 4];
        if !config.syllables.contains_key(&*kana.encode_utf8(&mut buf)) {
            return Err(RomajiConfigError::MissingSyllable(kana));
        }
    }

    Ok(config)
}
