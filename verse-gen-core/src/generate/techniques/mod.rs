//! The sixteen technique engines.
//!
//! Every engine follows the same shape: read its merged options, run its
//! validators (first failure short-circuits as the result), then build
//! lines from the shared substrate. None of them mutates the source text
//! or keeps state beyond its own call.

pub(super) mod abecedarian;
pub(super) mod aleatory;
pub(super) mod alliterative;
pub(super) mod beautiful_outlaw;
pub(super) mod cut_up;
pub(super) mod definitional;
pub(super) mod erasure;
pub(super) mod found;
pub(super) mod kwic;
pub(super) mod lipogram;
pub(super) mod mesostic;
pub(super) mod n_plus_seven;
pub(super) mod prisoners;
pub(super) mod snowball;

mod window;
