//! Read-only document model over source text and its token stream.
//!
//! A [`Document`] pairs the source string with the token stream produced at
//! construction and hands out [`TokenCursor`] values positioned at byte
//! offsets. It is a snapshot: nothing here mutates after `new`, so any number
//! of cursors can navigate it independently. Hosts that edit text build a
//! fresh `Document` per classification request.

use std::ops::Range;

use crate::sexp::cursor::TokenCursor;
use crate::sexp::lexing::tokenize;
use crate::sexp::token::Token;

/// An immutable source document with its token stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    text: String,
    tokens: Vec<(Token, Range<usize>)>,
}

impl Document {
    /// Tokenize `text` and hold both.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = tokenize(&text);
        Self { text, tokens }
    }

    /// The full source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the source text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The token stream as `(token, byte range)` pairs, in document order.
    pub fn tokens(&self) -> &[(Token, Range<usize>)] {
        &self.tokens
    }

    /// Literal text between two byte offsets.
    ///
    /// Total: reversed or out-of-range bounds yield `""`, as does a slice
    /// that does not fall on character boundaries. Callers inspecting
    /// whitespace runs between token boundaries never hit the lossy case.
    pub fn get_text(&self, start: usize, end: usize) -> &str {
        let end = end.min(self.text.len());
        if start >= end {
            return "";
        }
        self.text.get(start..end).unwrap_or("")
    }

    /// A cursor positioned at `offset`, clamped to the document length.
    ///
    /// The cursor's token is the token covering `offset`, or the token
    /// immediately following it when `offset` falls on a boundary.
    pub fn token_cursor(&self, offset: usize) -> TokenCursor<'_> {
        TokenCursor::new(self, offset)
    }
}
