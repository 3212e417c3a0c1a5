//! Base tokenization implementation for the sexp lexer
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token streams.

use crate::sexp::token::Token;
use logos::Logos;

/// Tokenize source code with location information
///
/// This function performs raw tokenization using the logos lexer, returning
/// tokens paired with their byte ranges. The resulting stream is gap-free:
/// consecutive spans tile the input exactly, which the document's cursor
/// positioning invariant depends on.
pub fn tokenize(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            // The grammar is total, but if a byte ever escapes it, fold it
            // into an atom so the stream stays gap-free.
            Err(()) => tokens.push((Token::Atom(lexer.slice().to_owned()), lexer.span())),
        }
    }

    tokens
}
