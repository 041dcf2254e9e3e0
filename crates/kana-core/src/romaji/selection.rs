//! Caret and selection remapping across a romaji conversion.

use super::convert::ConversionToken;

/// Half-open char range `start..end`. A caret has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    start: usize,
    end: usize,
}

impl Selection {
    /// Build a selection from two offsets in either order.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }
}

/// Translate one input offset to the matching output offset.
///
/// An offset inside a token keeps its distance from the token start,
/// clamped to what the token produced.
fn remap_offset(offset: usize, tokens: &[ConversionToken]) -> usize {
    let mut out = 0;
    for token in tokens {
        if offset <= token.start {
            return out;
        }
        let out_len = token.output_len();
        if offset < token.end {
            return out + (offset - token.start).min(out_len);
        }
        out += out_len;
    }
    out
}

/// Map `selection` over the pre-conversion text onto the converted text.
///
/// An empty token list or a caret at 0 yields a caret at 0.
pub fn remap_selection(selection: Selection, tokens: &[ConversionToken]) -> Selection {
    if tokens.is_empty() || (selection.is_caret() && selection.start == 0) {
        return Selection::caret(0);
    }
    let start = remap_offset(selection.start, tokens);
    if selection.is_caret() {
        return Selection::caret(start);
    }
    Selection::new(start, remap_offset(selection.end, tokens))
}
