//! Constrained-text generation library.
//!
//! This crate provides a modular constrained-writing engine including:
//! - Word extraction, sentence splitting and positional tokenization
//! - In-place text reconstruction from sparse replacement maps
//! - Sixteen generation techniques (cut-up, erasure, mesostic, N+7, ...)
//! - A technique dispatcher with per-technique defaults and validation
//!
//! All randomness flows through a caller-supplied `rand::Rng`, so a fixed
//! seed reproduces output exactly. No state survives between calls.

/// Word/sentence extraction and positional reconstruction primitives.
///
/// These are the shared substrate every technique is built from.
pub mod text;

/// Generation techniques, sampling, validation and dispatch.
///
/// This module exposes the high-level `generate` interface while keeping
/// individual technique implementations private.
pub mod generate;

/// Dictionary lookup contract used by the N+7 and definitional techniques.
///
/// The storage engine behind it is the caller's concern; only the lookup
/// boundary lives here.
pub mod dictionary;
