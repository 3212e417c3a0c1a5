//! # sexp-analysis
//!
//! Editor-facing analysis over the sexp token stream. The current surface is
//! cursor context classification: given a document and a byte offset, derive
//! the structural conditions (in a string, in a comment, at line start, at
//! line end, before/after a comment) a host editor keys its conditional
//! behavior on.

pub mod context;

pub use context::{
    determine_contexts, is_at_line_end, is_at_line_start, CursorContext, ALL_CURSOR_CONTEXTS,
};
