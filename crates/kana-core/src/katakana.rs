//! Katakana → Hiragana normalization ahead of romaji matching.
//!
//! Output always has exactly as many chars as the input, so conversion
//! tokens computed over the normalized text index the original text too.

use crate::tree::MappingTree;
use crate::unicode::{is_kana_as_symbol, is_slash_dot, shift_katakana, PROLONGED_SOUND_MARK};

/// Hiragana used to spell out a prolonged vowel, keyed by the romanized vowel.
/// Long "o" is written with う, matching the Hepburn "ō".
fn long_vowel(vowel: char) -> Option<char> {
    match vowel {
        'a' => Some('あ'),
        'i' => Some('い'),
        'u' => Some('う'),
        'e' => Some('え'),
        'o' => Some('う'),
        _ => None,
    }
}

/// Rewrite katakana as hiragana, expanding ー after a kana into the vowel
/// that kana ends with (ゲーム → げえむ, コーヒー → こうひい).
///
/// The mark is left alone at index 0, after non-katakana, or when the
/// previous kana does not end in a vowel (ンー, ッー). ・, ヶ and ヵ pass
/// through unchanged.
pub fn normalize_katakana(input: &str, tree: &MappingTree) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_kana: Option<char> = None;

    for (index, c) in input.chars().enumerate() {
        if is_slash_dot(c) || (c == PROLONGED_SOUND_MARK && index == 0) || is_kana_as_symbol(c)
        {
            out.push(c);
            continue;
        }

        if c == PROLONGED_SOUND_MARK {
            if let Some(vowel) = previous_kana
                .and_then(|kana| tree.root().get(kana))
                .and_then(|node| node.value())
                .and_then(|romaji| romaji.chars().last())
                .and_then(long_vowel)
            {
                out.push(vowel);
                continue;
            }
        } else if let Some(hira) = shift_katakana(c) {
            previous_kana = Some(hira);
            out.push(hira);
            continue;
        }

        previous_kana = None;
        out.push(c);
    }

    out
}
