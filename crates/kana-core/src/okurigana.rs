//! Okurigana removal: drop the kana run at the start or end of a word.

use crate::tokenize::tokenize;
use crate::unicode::{is_japanese, is_kana, is_kanji};

/// Remove trailing (or, with `leading`, initial) okurigana from `text`.
///
/// The run to remove is the last/first script run of `match_kanji` when
/// given, otherwise of `text` itself. `text` comes back unchanged when it is
/// not Japanese, has no kana at that edge, `match_kanji` contains no kanji,
/// or `text` is all kana and there is no reference word.
pub fn strip_okurigana(text: &str, leading: bool, match_kanji: Option<&str>) -> String {
    let match_kanji = match_kanji.filter(|m| !m.is_empty());

    let edge = if leading {
        text.chars().next()
    } else {
        text.chars().next_back()
    };
    let Some(edge) = edge else {
        return String::new();
    };
    if !text.chars().all(is_japanese) || !is_kana(edge) {
        return text.to_string();
    }
    let invalid_matcher = match match_kanji {
        Some(reference) => !reference.chars().any(is_kanji),
        None => text.chars().all(is_kana),
    };
    if invalid_matcher {
        return text.to_string();
    }

    let runs = tokenize(match_kanji.unwrap_or(text), false);
    let run = if leading { runs.first() } else { runs.last() };
    let stripped = run.and_then(|run| {
        if leading {
            text.strip_prefix(run.as_str())
        } else {
            text.strip_suffix(run.as_str())
        }
    });
    stripped.unwrap_or(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing() {
        assert_eq!(strip_okurigana("踏み込む", false, None), "踏み込");
        assert_eq!(strip_okurigana("使う", false, None), "使");
        assert_eq!(strip_okurigana("美味しい", false, None), "美味");
    }

    #[test]
    fn leading() {
        assert_eq!(strip_okurigana("お腹", true, None), "腹");
        assert_eq!(strip_okurigana("お祝い", true, None), "祝い");
    }

    #[test]
    fn with_reference_word() {
        assert_eq!(strip_okurigana("ふみこむ", false, Some("踏み込む")), "ふみこ");
        assert_eq!(strip_okurigana("おみまい", true, Some("お祝い")), "みまい");
        // The reference's run must actually match.
        assert_eq!(strip_okurigana("ふみこむ", false, Some("踏み込め")), "ふみこむ");
    }

    #[test]
    fn unchanged_inputs() {
        assert_eq!(strip_okurigana("", false, None), "");
        assert_eq!(strip_okurigana("", true, Some("漢")), "");
        assert_eq!(strip_okurigana("abc", false, None), "abc");
        assert_eq!(strip_okurigana("踏み込む", true, None), "踏み込む");
        assert_eq!(strip_okurigana("お腹", false, None), "お腹");
        assert_eq!(strip_okurigana("ふみこむ", false, None), "ふみこむ");
        assert_eq!(strip_okurigana("踏み込む", false, Some("abc")), "踏み込む");
        assert_eq!(strip_okurigana("踏み込む", false, Some("ふみこむ")), "踏み込む");
    }

    #[test]
    fn empty_reference_is_no_reference() {
        assert_eq!(strip_okurigana("踏み込む", false, Some("")), "踏み込");
    }
}
