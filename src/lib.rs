//! Japanese script classification and kana → Hepburn romaji conversion.
//!
//! String-level entry points over `kana_core`. Every function here is total:
//! unmapped characters are copied through, never reported as errors.
//! Character-level predicates are re-exported under [`unicode`].

mod trace_init;


use regex::Regex;
use tracing::debug_span;

pub use kana_core::romaji::{ConversionToken, RomajiConfigError, Selection, ToRomajiOptions};
pub use kana_core::tokenize::{TokenClass, TypedToken};
pub use kana_core::unicode;
pub use kana_core::unicode::{CompactClass, ScriptClass};
pub use trace_init::init_tracing;

/// Install a custom romaji table (TOML) before the first conversion.
///
/// Fails if the table is invalid or one was already installed. Without this
/// call the embedded default table is used.
pub fn init_romaji_table(toml_content: String) -> Result<(), RomajiConfigError> {
    kana_core::romaji::init_custom(toml_content)
}

fn matches_allowed(allowed: Option<&Regex>, c: char) -> bool {
    let mut buf = [0u8; 4];
    allowed.is_some_and(|re| re.is_match(c.encode_utf8(&mut buf)))
}

/// True if every char is romaji (ASCII or a Hepburn macron vowel) or matches
/// `allowed`. Empty input is vacuously romaji.
pub fn is_romaji(text: &str, allowed: Option<&Regex>) -> bool {
    text.chars()
        .all(|c| unicode::is_romaji(c) || matches_allowed(allowed, c))
}

/// True if every char is Japanese script (kana, kanji, zenkaku letters,
/// digits and punctuation) or matches `allowed`.
pub fn is_japanese(text: &str, allowed: Option<&Regex>) -> bool {
    text.chars()
        .all(|c| unicode::is_japanese(c) || matches_allowed(allowed, c))
}

/// True if any char is Japanese script.
pub fn has_japanese(text: &str) -> bool {
    text.chars().any(unicode::is_japanese)
}

pub fn is_kana(text: &str) -> bool {
    text.chars().all(unicode::is_kana)
}

pub fn is_hiragana(text: &str) -> bool {
    text.chars().all(unicode::is_hiragana)
}

pub fn is_katakana(text: &str) -> bool {
    text.chars().all(unicode::is_katakana)
}

/// True if every char is kanji. The empty string counts as kanji.
pub fn is_kanji(text: &str) -> bool {
    text.chars().all(unicode::is_kanji)
}

/// Convert kana to Hepburn romaji.
pub fn to_romaji(text: &str, options: ToRomajiOptions) -> String {
    kana_core::romaji::to_romaji(text, options)
}

/// Convert kana to romaji and carry a caret/selection over to the result.
pub fn to_romaji_with_selection(
    text: &str,
    selection: Selection,
    options: ToRomajiOptions,
) -> (String, Selection) {
    kana_core::romaji::to_romaji_with_selection(text, selection, options)
}

/// Strip okurigana from the end (or start, with `leading`) of `text`.
pub fn strip_okurigana(text: &str, leading: bool, match_kanji: Option<&str>) -> String {
    let _span = debug_span!("strip_okurigana", leading).entered();
    kana_core::okurigana::strip_okurigana(text, leading, match_kanji)
}

/// Split `text` into same-script runs.
pub fn tokenize(text: &str, compact: bool) -> Vec<String> {
    kana_core::tokenize::tokenize(text, compact)
}

/// Split `text` into same-script runs, keeping each run's class.
pub fn tokenize_typed(text: &str, compact: bool) -> Vec<TypedToken> {
    kana_core::tokenize::tokenize_typed(text, compact)
}

pub fn katakana_to_hiragana(text: &str) -> String {
    unicode::katakana_to_hiragana(text)
}

pub fn hiragana_to_katakana(text: &str) -> String {
    unicode::hiragana_to_katakana(text)
}
