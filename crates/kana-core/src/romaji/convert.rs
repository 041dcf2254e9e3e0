use tracing::{debug, debug_span};

use super::selection::{remap_selection, Selection};
use super::table::hepburn_tree;
use crate::katakana::normalize_katakana;
use crate::tree::{MappingTree, NodeRef};
use crate::unicode::is_katakana;

/// One matched span of the input.
///
/// `start..end` are char offsets into the input. `value` is `None` only for
/// a trailing span that could still grow into a longer match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionToken {
    pub start: usize,
    pub end: usize,
    pub value: Option<String>,
}

impl ConversionToken {
    /// Chars this token contributes to the output. Pending tokens are copied
    /// verbatim, so they keep their input width.
    pub fn output_len(&self) -> usize {
        match &self.value {
            Some(v) => v.chars().count(),
            None => self.end - self.start,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToRomajiOptions {
    /// Resolve a trailing ambiguous sequence (き before a possible ゃ) now
    /// instead of leaving it pending.
    pub convert_ending: bool,
    /// Upper-case romaji produced from katakana.
    pub uppercase_katakana: bool,
}

impl Default for ToRomajiOptions {
    fn default() -> Self {
        Self {
            convert_ending: true,
            uppercase_katakana: false,
        }
    }
}

/// Split `input` into longest-match tokens against `tree`.
///
/// A token ends when the next char has no edge from the current node or the
/// current node is a leaf; the failing char starts the next token. The token
/// takes the last value seen along its path, or its raw chars when the path
/// never passed a value (a char with no edge from the root stays itself).
pub fn split_into_tokens(
    input: &[char],
    tree: &MappingTree,
    convert_ending: bool,
) -> Vec<ConversionToken> {
    let mut tokens = Vec::new();
    let mut start = 0;

    while start < input.len() {
        let mut node: Option<NodeRef<'_>> = tree.root().get(input[start]);
        let mut last_value: Option<&str> = node.and_then(|n| n.value());
        let mut end = start + 1;

        let resolve = |last_value: Option<&str>, end: usize| -> String {
            match last_value {
                Some(v) => v.to_string(),
                None => input[start..end].iter().collect(),
            }
        };

        loop {
            let Some(current) = node.filter(|n| !n.is_leaf()) else {
                tokens.push(ConversionToken {
                    start,
                    end,
                    value: Some(resolve(last_value, end)),
                });
                break;
            };

            if end == input.len() {
                // Input ran out while a longer match was still possible.
                tokens.push(ConversionToken {
                    start,
                    end,
                    value: convert_ending.then(|| resolve(last_value, end)),
                });
                break;
            }

            match current.get(input[end]) {
                Some(child) => {
                    if let Some(v) = child.value() {
                        last_value = Some(v);
                    }
                    node = Some(child);
                    end += 1;
                }
                None => {
                    tokens.push(ConversionToken {
                        start,
                        end,
                        value: Some(resolve(last_value, end)),
                    });
                    break;
                }
            }
        }

        start = end;
    }

    tokens
}

/// Normalize katakana and tokenize against the process-wide Hepburn tree.
pub fn romaji_tokens(text: &str, convert_ending: bool) -> Vec<ConversionToken> {
    let tree = hepburn_tree();
    let hiragana: Vec<char> = normalize_katakana(text, tree).chars().collect();
    split_into_tokens(&hiragana, tree, convert_ending)
}

/// Join tokens into the output string. Pending tokens copy the source slice.
fn assemble(source: &[char], tokens: &[ConversionToken], uppercase_katakana: bool) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    for token in tokens {
        let slice = &source[token.start..token.end];
        match &token.value {
            Some(v) if uppercase_katakana && slice.iter().all(|&c| is_katakana(c)) => {
                out.push_str(&v.to_uppercase());
            }
            Some(v) => out.push_str(v),
            None => out.extend(slice),
        }
    }
    out
}

/// Convert kana in `text` to Hepburn romaji. Anything unmapped is copied.
pub fn to_romaji(text: &str, options: ToRomajiOptions) -> String {
    let source: Vec<char> = text.chars().collect();
    let _span = debug_span!("to_romaji", char_count = source.len()).entered();
    let tokens = romaji_tokens(text, options.convert_ending);
    debug!(token_count = tokens.len());
    assemble(&source, &tokens, options.uppercase_katakana)
}

/// Convert `text` and carry `selection` over to the converted string.
pub fn to_romaji_with_selection(
    text: &str,
    selection: Selection,
    options: ToRomajiOptions,
) -> (String, Selection) {
    let source: Vec<char> = text.chars().collect();
    let _span = debug_span!("to_romaji_with_selection", char_count = source.len()).entered();
    let tokens = romaji_tokens(text, options.convert_ending);
    let converted = assemble(&source, &tokens, options.uppercase_katakana);
    (converted, remap_selection(selection, &tokens))
}
