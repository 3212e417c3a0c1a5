//! Value-semantics token cursor.
//!
//! A [`TokenCursor`] is an immutable `(document, token index)` pair obtained
//! from [`Document::token_cursor`]. Navigation (`next`, `previous`, the
//! whitespace skips) consumes the cursor and returns a new one, so peeking
//! ahead is just `cursor.next().kind()` with the original still in hand —
//! there is no position to restore and no way for two cursors to alias.
//!
//! Stream boundaries saturate. Stepping past the last token parks the cursor
//! on an end-of-stream sentinel that reports [`TokenKind::Eol`]: every line
//! ends with an end-of-line marker, including the last one, so end of input
//! classifies as the end of the final line. Stepping before the first token
//! is a no-op, and `prev_kind` reports `None` there; consumers treat the
//! missing predecessor conservatively (not an end-of-line marker).

use crate::sexp::document::Document;
use crate::sexp::token::{Token, TokenKind};

/// A read-only cursor into a document's token stream.
#[derive(Debug, Clone, Copy)]
pub struct TokenCursor<'a> {
    doc: &'a Document,
    index: usize,
}

impl<'a> TokenCursor<'a> {
    /// Position a cursor at `offset`: on the token covering the offset, or
    /// on the token immediately following when the offset is a boundary.
    pub(crate) fn new(doc: &'a Document, offset: usize) -> Self {
        let offset = offset.min(doc.len());
        let index = doc
            .tokens()
            .partition_point(|(_, span)| span.end <= offset);
        Self { doc, index }
    }

    /// The token under the cursor, `None` at end of stream.
    pub fn token(&self) -> Option<&'a Token> {
        self.doc.tokens().get(self.index).map(|(token, _)| token)
    }

    /// The token immediately before the cursor, without moving it.
    pub fn prev_token(&self) -> Option<&'a Token> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.doc.tokens().get(i))
            .map(|(token, _)| token)
    }

    /// Kind of the token under the cursor; the end-of-stream sentinel
    /// reports `Eol`.
    pub fn kind(&self) -> TokenKind {
        match self.token() {
            Some(token) => token.kind(),
            None => TokenKind::Eol,
        }
    }

    /// Kind of the token immediately before the cursor; `None` at stream
    /// start.
    pub fn prev_kind(&self) -> Option<TokenKind> {
        self.prev_token().map(Token::kind)
    }

    /// Start offset of the token under the cursor; document length at end
    /// of stream.
    pub fn offset_start(&self) -> usize {
        match self.doc.tokens().get(self.index) {
            Some((_, span)) => span.start,
            None => self.doc.len(),
        }
    }

    /// The cursor advanced by one token. Saturates at end of stream.
    pub fn next(mut self) -> Self {
        if self.index < self.doc.tokens().len() {
            self.index += 1;
        }
        self
    }

    /// The cursor moved back by one token. Saturates at stream start.
    pub fn previous(mut self) -> Self {
        self.index = self.index.saturating_sub(1);
        self
    }

    /// The cursor advanced past a maximal run of whitespace tokens.
    ///
    /// With `cross_eol` false the skip stops at (not past) an end-of-line
    /// marker; with it true, end-of-line markers are skipped like
    /// whitespace.
    pub fn forward_whitespace(mut self, cross_eol: bool) -> Self {
        while let Some((token, _)) = self.doc.tokens().get(self.index) {
            let kind = token.kind();
            if !(kind.is_whitespace() || (cross_eol && kind.is_eol())) {
                break;
            }
            self.index += 1;
        }
        self
    }

    /// The cursor moved back past a maximal run of whitespace tokens.
    ///
    /// Same `cross_eol` contract as [`TokenCursor::forward_whitespace`].
    pub fn backward_whitespace(mut self, cross_eol: bool) -> Self {
        while let Some(i) = self.index.checked_sub(1) {
            let kind = self.doc.tokens()[i].0.kind();
            if !(kind.is_whitespace() || (cross_eol && kind.is_eol())) {
                break;
            }
            self.index = i;
        }
        self
    }

    /// True when the cursor position lies inside a string literal.
    ///
    /// The position at the end of input counts as inside when the last
    /// token is an open string (a literal that never closed), reflecting
    /// the lexer's best-effort judgment on malformed input.
    pub fn within_string(&self) -> bool {
        match self.token() {
            Some(Token::Str(_)) => true,
            None => matches!(self.doc.tokens().last(), Some((token, _)) if token.is_open_string()),
            _ => false,
        }
    }

    /// True when the cursor position lies inside a comment region.
    ///
    /// A comment region extends through the trailing whitespace up to and
    /// including its terminating end-of-line marker: on the comment token
    /// itself this is immediate, on whitespace/end-of-line (or at end of
    /// stream) the region membership is decided by the nearest preceding
    /// non-whitespace token on the same line.
    pub fn within_comment(&self) -> bool {
        match self.kind() {
            TokenKind::Comment => true,
            TokenKind::Whitespace | TokenKind::Eol => {
                let mut index = self.index;
                while let Some(i) = index.checked_sub(1) {
                    match self.doc.tokens()[i].0.kind() {
                        TokenKind::Whitespace => index = i,
                        TokenKind::Comment => return true,
                        _ => return false,
                    }
                }
                false
            }
            _ => false,
        }
    }
}
