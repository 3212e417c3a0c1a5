//! # sexp-parser
//!
//! Tokenizer and cursor document model for Lisp-family source.
//!
//! This crate is the ground layer of the sexp toolchain: it turns raw source
//! text into a token stream and exposes a read-only document model over both.
//! The editor-facing analysis (cursor context classification) lives in the
//! `sexp-analysis` crate and consumes this one through three surfaces:
//!
//! - [`sexp::document::Document`]: owns the text and its token stream
//! - [`sexp::cursor::TokenCursor`]: a value-semantics cursor over the stream
//! - [`sexp::token::TokenKind`]: the closed classification tokens carry
//!
//! The token stream is an immutable log: `(Token, Range<usize>)` pairs from
//! the logos lexer, never modified after construction. All navigation happens
//! through cursor values, so no consumer can perturb another's view.

pub mod sexp;
