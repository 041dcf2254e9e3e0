//! Split text into runs of characters that share a script class.

use tracing::{debug, debug_span};

use crate::unicode::{
    classify, classify_compact, CompactClass, ScriptClass, PROLONGED_SOUND_MARK,
};

/// Class attached to a token: strict or compact, depending on the mode used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Strict(ScriptClass),
    Compact(CompactClass),
}

impl TokenClass {
    fn of(c: char, compact: bool) -> Self {
        if compact {
            TokenClass::Compact(classify_compact(c))
        } else {
            TokenClass::Strict(classify(c))
        }
    }

    /// Whether a ー following this class stays in the same run.
    fn absorbs_prolonged_mark(self) -> bool {
        matches!(
            self,
            TokenClass::Strict(ScriptClass::Hiragana)
                | TokenClass::Strict(ScriptClass::Katakana)
                | TokenClass::Compact(CompactClass::Ja)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedToken {
    pub text: String,
    pub class: TokenClass,
}

/// Run-length encode `text` by character class.
///
/// Concatenating the token texts gives back `text`.
pub fn tokenize_typed(text: &str, compact: bool) -> Vec<TypedToken> {
    let _span = debug_span!("tokenize", compact).entered();
    let mut tokens: Vec<TypedToken> = Vec::new();

    for c in text.chars() {
        let mut class = TokenClass::of(c, compact);
        if let Some(last) = tokens.last_mut() {
            if c == PROLONGED_SOUND_MARK && last.class.absorbs_prolonged_mark() {
                class = last.class;
            }
            if last.class == class {
                last.text.push(c);
                continue;
            }
        }
        tokens.push(TypedToken {
            text: c.to_string(),
            class,
        });
    }

    debug!(token_count = tokens.len());
    tokens
}

/// Like [`tokenize_typed`], keeping only the text of each run.
pub fn tokenize(text: &str, compact: bool) -> Vec<String> {
    tokenize_typed(text, compact)
        .into_iter()
        .map(|t| t.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert!(tokenize("", false).is_empty());
        assert!(tokenize("", true).is_empty());
    }

    #[test]
    fn strict_mixed_scripts() {
        assert_eq!(
            tokenize("ふふフフ", false),
            vec!["ふふ".to_string(), "フフ".to_string()]
        );
        assert_eq!(tokenize("感じ", false), vec!["感", "じ"]);
        assert_eq!(tokenize("人々", false), vec!["人々"]);
        assert_eq!(tokenize("時々は", false), vec!["時々", "は"]);
        assert_eq!(
            tokenize("truly 私は悲しい", false),
            vec!["truly", " ", "私", "は", "悲", "しい"]
        );
    }

    #[test]
    fn strict_numbers_and_punctuation() {
        assert_eq!(
            tokenize("５回! 10回。", false),
            vec!["５", "回", "!", " ", "10", "回", "。"]
        );
    }

    #[test]
    fn strict_types() {
        let tokens = tokenize_typed("ラーメンを食べた", false);
        let classes: Vec<TokenClass> = tokens.iter().map(|t| t.class).collect();
        assert_eq!(tokens[0].text, "ラーメン");
        assert_eq!(
            classes,
            vec![
                TokenClass::Strict(ScriptClass::Katakana),
                TokenClass::Strict(ScriptClass::Hiragana),
                TokenClass::Strict(ScriptClass::Kanji),
                TokenClass::Strict(ScriptClass::Hiragana),
            ]
        );
    }

    #[test]
    fn leading_prolonged_mark_is_punctuation() {
        let tokens = tokenize_typed("ーあ", false);
        assert_eq!(tokens[0].class, TokenClass::Strict(ScriptClass::JapanesePunctuation));
        assert_eq!(tokens[1].text, "あ");
    }

    #[test]
    fn compact_mode() {
        assert_eq!(
            tokenize("5romaji here...!?漢字ひらがなカタ　カナ４「ＳＨＩＯ」。！", true),
            vec![
                "5",
                "romaji here",
                "...!?",
                "漢字ひらがなカタ　カナ",
                "４「",
                "ＳＨＩＯ",
                "」。！",
            ]
        );
    }

    #[test]
    fn compact_types() {
        let tokens = tokenize_typed("abc 漢字", true);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].class, TokenClass::Compact(CompactClass::En));
        assert_eq!(tokens[1].class, TokenClass::Compact(CompactClass::Ja));
    }

    #[test]
    fn lossless() {
        for s in ["", "a", "ゲーム　game", "泣き虫。！〜＄", "ーーー", "１２３abc漢"] {
            for compact in [false, true] {
                assert_eq!(tokenize(s, compact).concat(), s);
            }
        }
    }
}
