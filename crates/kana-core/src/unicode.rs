//! Character-level Unicode classification for Japanese text.
//!
//! Every predicate here is a closed-range lookup over a single `char`. String
//! level folds live with their callers; this module never allocates.

use std::ops::RangeInclusive;

pub const HIRAGANA_START: char = '\u{3041}';
pub const HIRAGANA_END: char = '\u{3096}';
pub const KATAKANA_START: char = '\u{30A1}';
pub const KATAKANA_END: char = '\u{30FC}';

/// ー (U+30FC). Sits at the end of the Katakana range but is also accepted as
/// Hiragana, since readings like "らーめん" use it.
pub const PROLONGED_SOUND_MARK: char = '\u{30FC}';
/// ・ (U+30FB).
pub const KATAKANA_MIDDLE_DOT: char = '\u{30FB}';
/// 々 (U+3005). Repeats the previous kanji, so it classifies as one.
pub const KANJI_ITERATION_MARK: char = '\u{3005}';
/// Full-width (zenkaku) space.
pub const JA_SPACE: char = '\u{3000}';

const HIRAGANA_BLOCK: RangeInclusive<char> = '\u{3040}'..='\u{309F}';
const KATAKANA_BLOCK: RangeInclusive<char> = '\u{30A0}'..='\u{30FF}';
const HANKAKU_KATAKANA: RangeInclusive<char> = '\u{FF66}'..='\u{FF9F}';
const KANA_PUNCTUATION: RangeInclusive<char> = '\u{FF61}'..='\u{FF65}';
const KATAKANA_PUNCTUATION: RangeInclusive<char> = '\u{30FB}'..='\u{30FC}';
const CJK_SYMBOLS_PUNCTUATION: RangeInclusive<char> = '\u{3000}'..='\u{303F}';

const ZENKAKU_NUMBERS: RangeInclusive<char> = '\u{FF10}'..='\u{FF19}';
const ZENKAKU_UPPERCASE: RangeInclusive<char> = '\u{FF21}'..='\u{FF3A}';
const ZENKAKU_LOWERCASE: RangeInclusive<char> = '\u{FF41}'..='\u{FF5A}';

const COMMON_CJK: RangeInclusive<char> = '\u{4E00}'..='\u{9FFF}';
const RARE_CJK: RangeInclusive<char> = '\u{3400}'..='\u{4DBF}';

static JA_PUNCTUATION_RANGES: &[RangeInclusive<char>] = &[
    CJK_SYMBOLS_PUNCTUATION,
    KANA_PUNCTUATION,
    KATAKANA_PUNCTUATION,
    '\u{FF01}'..='\u{FF0F}',
    '\u{FF1A}'..='\u{FF1F}',
    '\u{FF3B}'..='\u{FF3F}',
    '\u{FF5B}'..='\u{FF60}',
    // Zenkaku currency and symbols (￠ ￡ ￥ ...)
    '\u{FFE0}'..='\u{FFEE}',
];

static JAPANESE_RANGES: &[RangeInclusive<char>] = &[
    HIRAGANA_BLOCK,
    KATAKANA_BLOCK,
    KANA_PUNCTUATION,
    HANKAKU_KATAKANA,
    CJK_SYMBOLS_PUNCTUATION,
    KATAKANA_PUNCTUATION,
    '\u{FF01}'..='\u{FF0F}',
    '\u{FF1A}'..='\u{FF1F}',
    '\u{FF3B}'..='\u{FF3F}',
    '\u{FF5B}'..='\u{FF60}',
    '\u{FFE0}'..='\u{FFEE}',
    ZENKAKU_UPPERCASE,
    ZENKAKU_LOWERCASE,
    ZENKAKU_NUMBERS,
    COMMON_CJK,
    RARE_CJK,
];

/// ASCII plus the five Hepburn macron pairs (Ā ā, Ē ē, Ī ī, Ō ō, Ū ū).
static ROMAJI_RANGES: &[RangeInclusive<char>] = &[
    '\u{0000}'..='\u{007F}',
    '\u{0100}'..='\u{0101}',
    '\u{0112}'..='\u{0113}',
    '\u{012A}'..='\u{012B}',
    '\u{014C}'..='\u{014D}',
    '\u{016A}'..='\u{016B}',
];

static LATIN_PUNCTUATION_RANGES: &[RangeInclusive<char>] = &[
    '\u{0020}'..='\u{002F}',
    '\u{003A}'..='\u{003F}',
    '\u{005B}'..='\u{0060}',
    '\u{007B}'..='\u{007E}',
    // Smart quotes
    '\u{2018}'..='\u{2019}',
    '\u{201C}'..='\u{201D}',
];

fn in_ranges(ranges: &[RangeInclusive<char>], c: char) -> bool {
    ranges.iter().any(|r| r.contains(&c))
}

/// Script category of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptClass {
    Hiragana,
    Katakana,
    Kanji,
    RomajiLatin,
    Space,
    JapaneseNumeral,
    LatinNumeral,
    JapanesePunctuation,
    LatinPunctuation,
    Other,
}

/// Coarse language bucket used by compact tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompactClass {
    En,
    Ja,
    Other,
}

pub fn is_hiragana(c: char) -> bool {
    c == PROLONGED_SOUND_MARK || (HIRAGANA_START..=HIRAGANA_END).contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    (KATAKANA_START..=KATAKANA_END).contains(&c)
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

pub fn is_kanji(c: char) -> bool {
    c == KANJI_ITERATION_MARK || COMMON_CJK.contains(&c) || RARE_CJK.contains(&c)
}

pub fn is_romaji(c: char) -> bool {
    in_ranges(ROMAJI_RANGES, c)
}

pub fn is_japanese(c: char) -> bool {
    in_ranges(JAPANESE_RANGES, c)
}

pub fn is_japanese_punctuation(c: char) -> bool {
    c != KANJI_ITERATION_MARK && in_ranges(JA_PUNCTUATION_RANGES, c)
}

pub fn is_latin_punctuation(c: char) -> bool {
    in_ranges(LATIN_PUNCTUATION_RANGES, c)
}

pub fn is_japanese_numeral(c: char) -> bool {
    ZENKAKU_NUMBERS.contains(&c)
}

pub fn is_latin_numeral(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_japanese_space(c: char) -> bool {
    c == JA_SPACE
}

pub fn is_latin_space(c: char) -> bool {
    c == ' '
}

/// ・ is kept verbatim by the Katakana normalizer.
pub fn is_slash_dot(c: char) -> bool {
    c == KATAKANA_MIDDLE_DOT
}

/// ヶ and ヵ are used as counters/symbols rather than syllables.
pub fn is_kana_as_symbol(c: char) -> bool {
    matches!(c, 'ヶ' | 'ヵ')
}

/// Strict classification into one of the ten script classes.
pub fn classify(c: char) -> ScriptClass {
    if is_japanese_space(c) || is_latin_space(c) {
        ScriptClass::Space
    } else if is_japanese_numeral(c) {
        ScriptClass::JapaneseNumeral
    } else if is_latin_numeral(c) {
        ScriptClass::LatinNumeral
    } else if is_latin_punctuation(c) {
        ScriptClass::LatinPunctuation
    } else if is_japanese_punctuation(c) {
        ScriptClass::JapanesePunctuation
    } else if is_kanji(c) {
        ScriptClass::Kanji
    } else if is_hiragana(c) {
        ScriptClass::Hiragana
    } else if is_katakana(c) {
        ScriptClass::Katakana
    } else if is_romaji(c) {
        ScriptClass::RomajiLatin
    } else {
        ScriptClass::Other
    }
}

/// Compact classification: numerals and punctuation collapse to `Other`,
/// spaces follow their script.
pub fn classify_compact(c: char) -> CompactClass {
    if is_japanese_numeral(c) || is_latin_numeral(c) {
        CompactClass::Other
    } else if is_latin_space(c) {
        CompactClass::En
    } else if is_latin_punctuation(c) {
        CompactClass::Other
    } else if is_japanese_space(c) {
        CompactClass::Ja
    } else if is_japanese_punctuation(c) {
        CompactClass::Other
    } else if is_japanese(c) {
        CompactClass::Ja
    } else if is_romaji(c) {
        CompactClass::En
    } else {
        CompactClass::Other
    }
}

/// Convert a katakana string to hiragana by code point shift.
/// The prolonged sound mark and non-katakana characters pass through.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars().map(|c| shift_katakana(c).unwrap_or(c)).collect()
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if (HIRAGANA_START..=HIRAGANA_END).contains(&c) {
                char::from_u32(c as u32 + (KATAKANA_START as u32 - HIRAGANA_START as u32))
                    .unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// ァ..ヶ, the katakana that have a hiragana counterpart at a fixed offset.
const SHIFTABLE_KATAKANA: RangeInclusive<char> = '\u{30A1}'..='\u{30F6}';

/// Shift one katakana code point onto its hiragana counterpart.
/// `None` for anything outside ァ..ヶ (ヷ, ・, ー, non-katakana).
pub(crate) fn shift_katakana(c: char) -> Option<char> {
    if !SHIFTABLE_KATAKANA.contains(&c) {
        return None;
    }
    char::from_u32(c as u32 - (KATAKANA_START as u32 - HIRAGANA_START as u32))
}
