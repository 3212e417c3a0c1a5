//! Token definitions for Lisp-family source
//!
//! This module defines all the tokens that can be produced by the sexp lexer.
//! The tokens are defined using the logos derive macro for efficient
//! tokenization. The grammar is total: every input tokenizes into a gap-free
//! stream, which the cursor positioning invariants rely on.
//!
//! Comments run from `;` to the end of the line, newline excluded. String
//! literals may span newlines and may be left open (no closing quote) at the
//! end of input; see [`Token::is_open_string`]. Commas count as whitespace,
//! as is conventional in this token family.

use logos::Logos;

/// All possible tokens in Lisp-family source
#[derive(Logos, Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Token {
    // Whitespace (excluding newlines); commas are whitespace here.
    // Carriage returns are included so a stray \r never produces a gap,
    // while \r\n still lexes as a single newline below.
    #[regex(r"[ \t,\r]+")]
    Whitespace,

    // Line breaks
    #[regex(r"\r?\n")]
    Newline,

    #[regex(r";[^\r\n]*", |lex| lex.slice().to_owned())]
    Comment(String),

    // A string literal, quotes included. The trailing quote is optional so
    // an unterminated literal at end of input still lexes as one token.
    #[regex(r#""([^"\\]|\\.)*"?"#, |lex| lex.slice().to_owned())]
    Str(String),

    // Character literal. The escaped char is optional so a lone backslash
    // at end of input (or before a newline) still tokenizes.
    #[regex(r"\\.?", |lex| lex.slice().to_owned())]
    Char(String),

    // Delimiters
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    // Everything else: symbols, keywords, numbers, reader macro characters
    #[regex(r#"[^ \t,\r\n()\[\]{};"\\]+"#, |lex| lex.slice().to_owned())]
    Atom(String),
}

impl Token {
    /// The classification surface the context logic operates on.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Whitespace => TokenKind::Whitespace,
            Token::Newline => TokenKind::Eol,
            Token::Comment(_) => TokenKind::Comment,
            Token::Str(_) => TokenKind::Str,
            Token::Char(_) => TokenKind::Char,
            Token::OpenParen | Token::OpenBracket | Token::OpenBrace => TokenKind::Open,
            Token::CloseParen | Token::CloseBracket | Token::CloseBrace => TokenKind::Close,
            Token::Atom(_) => TokenKind::Atom,
        }
    }

    /// An open string is a literal that never sees its closing quote and
    /// runs to the end of input.
    pub fn is_open_string(&self) -> bool {
        match self {
            Token::Str(lexeme) => !str_is_terminated(lexeme),
            _ => false,
        }
    }
}

/// The kind of a token: the closed tag set line/context reasoning matches on.
///
/// `Whitespace` deliberately excludes `Eol`; the end-of-line marker is the
/// anchor for line-start/line-end reasoning and must stay distinguishable
/// from the whitespace runs around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Whitespace,
    Eol,
    Comment,
    Str,
    Char,
    Open,
    Close,
    Atom,
}

impl TokenKind {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    pub fn is_eol(&self) -> bool {
        matches!(self, TokenKind::Eol)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::Comment)
    }
}

/// True when a string lexeme closes with an unescaped quote.
///
/// The lexer guarantees a closing quote can only appear as the final
/// character, so the first unescaped quote after the opener terminates.
fn str_is_terminated(lexeme: &str) -> bool {
    let mut escaped = false;
    for c in lexeme.chars().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => return true,
            _ => {}
        }
    }
    false
}
