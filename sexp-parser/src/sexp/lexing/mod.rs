//! Lexing: from source strings to token streams.

pub mod base_tokenization;

pub use base_tokenization::tokenize;
