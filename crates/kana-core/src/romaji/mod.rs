//! Kana-to-romaji conversion engine.
//!
//! Builds a Hiragana → Hepburn mapping tree once per process and walks input
//! against it by longest match, handling sokuon (っ), the moraic nasal (ん)
//! and yōon (きゃ). Conversion tokens also drive caret remapping for IME use.

mod config;
mod convert;
mod selection;
mod table;

pub use config::{parse_romaji_toml, RomajiConfigError, RomajiTableConfig};
pub use convert::{
    romaji_tokens, split_into_tokens, to_romaji, to_romaji_with_selection, ConversionToken,
    ToRomajiOptions,
};
pub use selection::{remap_selection, Selection};
pub use table::{build_hepburn_tree, hepburn_tree, init_custom, DEFAULT_TOML};
