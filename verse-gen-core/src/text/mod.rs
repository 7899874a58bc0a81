//! Text substrate shared by every generation technique.
//!
//! Two concerns live here:
//! - `extract`: turning raw content into clean vocabulary lists, sentence
//!   lists, or positional token sequences
//! - `reconstruct`: splicing sparse replacements back onto a span of the
//!   original content without disturbing anything else

/// Tokenization: clean words, positional tokens, filtered sentences.
pub mod extract;

/// Offset-addressed reconstruction of a content span with replacements.
pub mod reconstruct;

pub use extract::PositionalToken;
