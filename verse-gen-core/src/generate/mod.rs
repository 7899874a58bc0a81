//! Generation layer: techniques, sampling, validation and dispatch.
//!
//! The public surface is deliberately small: a `Technique` identifier, an
//! options map, and one `generate` entry point returning a
//! `GenerationOutput` or a `GenerationError`. Individual technique engines
//! stay private so their contracts remain enforced by the dispatcher.

/// Technique identifiers and the enum-keyed dispatch entry point.
pub mod dispatch;

/// Merged option maps, typed getters and line-length buckets.
pub mod options;

/// Output and error values shared by every technique.
pub mod output;

/// Pure parameter / source-material validators.
///
/// Each returns `None` on success or a fixed-format message; techniques
/// short-circuit on the first failure.
pub mod validate;

/// Randomized selection primitives (distinct sampling, weighted lineation).
pub mod sample;

/// The sixteen technique engines. Internal; reached through `dispatch`.
mod techniques;

pub use dispatch::{generate, Technique};
pub use options::{LineLength, Options};
pub use output::{ErasurePage, GenerationError, GenerationOutput};
