//! Cursor context classification.
//!
//! Given a document and a byte offset, [`determine_contexts`] derives the
//! structural conditions holding at that position. Hosts map each tag onto a
//! named boolean condition for command and keybinding enablement; this module
//! only decides which tags apply.
//!
//! Two evaluation orders here are load-bearing:
//!
//! - at-line-start is checked before at-line-end, so a position satisfying
//!   both (e.g. inside a whitespace-only line) reports at-line-start;
//! - in-string is checked before in-comment, so the two memberships never
//!   co-occur.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use sexp_parser::sexp::document::Document;
use sexp_parser::sexp::token::TokenKind;

/// Matches a run of nothing but whitespace, as inspected by the line-end
/// check between the offset and the next token boundary.
static ALL_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+$").unwrap());

/// A structural condition holding at a cursor position.
///
/// Serialized with the kebab-case names hosts register
/// (`in-string`, `at-line-start`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorContext {
    InString,
    InComment,
    AtLineStart,
    AtLineEnd,
    BeforeComment,
    AfterComment,
}

/// The full context vocabulary, for hosts that register every condition up
/// front.
pub const ALL_CURSOR_CONTEXTS: [CursorContext; 6] = [
    CursorContext::InString,
    CursorContext::InComment,
    CursorContext::AtLineStart,
    CursorContext::AtLineEnd,
    CursorContext::BeforeComment,
    CursorContext::AfterComment,
];

impl CursorContext {
    /// The host-facing tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CursorContext::InString => "in-string",
            CursorContext::InComment => "in-comment",
            CursorContext::AtLineStart => "at-line-start",
            CursorContext::AtLineEnd => "at-line-end",
            CursorContext::BeforeComment => "before-comment",
            CursorContext::AfterComment => "after-comment",
        }
    }
}

impl fmt::Display for CursorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if `offset` is either at the first char of the token under
/// the cursor, or in the whitespace between that token and the first
/// preceding end-of-line marker.
///
/// On the first line of the document there is no preceding end-of-line
/// marker and this returns false.
pub fn is_at_line_start(doc: &Document, offset: usize) -> bool {
    let mut cursor = doc.token_cursor(offset);
    // only at start if we're in whitespace, or at the 1st char of a
    // non-whitespace token
    if !(cursor.kind().is_whitespace() || cursor.offset_start() >= offset) {
        return false;
    }
    while cursor.prev_kind() == Some(TokenKind::Whitespace) {
        cursor = cursor.previous();
    }
    cursor.prev_kind() == Some(TokenKind::Eol)
}

/// Returns true if `offset` is after the last token on the line, including
/// anywhere in the trailing whitespace or on the end-of-line marker itself.
pub fn is_at_line_end(doc: &Document, offset: usize) -> bool {
    let cursor = doc.token_cursor(offset);
    if cursor.kind().is_eol() {
        return true;
    }
    // at the very start of the next line's content, not the end of this one
    if cursor.prev_kind() == Some(TokenKind::Eol) && !cursor.kind().is_whitespace() {
        return false;
    }
    if cursor.kind().is_whitespace() && !cursor.next().kind().is_eol() {
        return false;
    }
    let ahead = cursor.forward_whitespace(true);
    ALL_WHITESPACE.is_match(doc.get_text(offset, ahead.offset_start()))
}

/// Derive the ordered set of contexts holding at `offset`.
///
/// A pure function of the document snapshot and the offset; repeated calls
/// return identical sequences.
pub fn determine_contexts(doc: &Document, offset: usize) -> Vec<CursorContext> {
    let cursor = doc.token_cursor(offset);
    let mut contexts = Vec::new();

    if is_at_line_start(doc, offset) {
        contexts.push(CursorContext::AtLineStart);
    } else if is_at_line_end(doc, offset) {
        contexts.push(CursorContext::AtLineEnd);
    }

    if cursor.within_string() {
        contexts.push(CursorContext::InString);
    } else if cursor.within_comment() {
        contexts.push(CursorContext::InComment);
    }

    // Compound contexts
    if contexts.contains(&CursorContext::InComment) {
        if contexts.contains(&CursorContext::AtLineEnd) {
            let ahead = cursor.forward_whitespace(false);
            if !ahead.kind().is_comment() {
                contexts.push(CursorContext::AfterComment);
            }
        } else if contexts.contains(&CursorContext::AtLineStart) {
            let behind = cursor.backward_whitespace(false);
            if behind.prev_kind() != Some(TokenKind::Comment) {
                contexts.push(CursorContext::BeforeComment);
            }
        }
    }

    contexts
}
