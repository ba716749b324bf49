//! Positional alignment between original and revised clause sequences.
//!
//! The aligner walks originals in ascending order and, for each one, looks
//! at a window of revised clauses around the same position. The closest
//! candidate by cosine similarity wins if it clears the threshold and has
//! not already been claimed by an earlier original; clauses that find no
//! partner become deleted rows, and leftover revised clauses become
//! insertions. Greedy and order-stable on purpose: contract revisions
//! overwhelmingly keep clause order, and a globally optimal assignment
//! would happily pair `C3` with `C17` to chase a few points of similarity.

mod engine;
mod types;

pub use engine::align;
pub use types::{
    AlignConfig, AlignError, AlignmentPlan, Slot, DEFAULT_MATCH_THRESHOLD, DEFAULT_WINDOW_RADIUS,
};
