//! Clause segmentation for contract-style documents.
//!
//! A document is a flat list of numbered clauses (`C1.`, `C2.`, ...). The
//! segmenter turns raw text into an ordered [`Clause`] sequence: clause-head
//! lines open a new clause, every other non-blank line is folded into the
//! clause being accumulated, and blank lines are skipped.
//!
//! Two supporting passes live here as well:
//! - [`collapse_whitespace`] squeezes whitespace runs to single spaces, which
//!   is the normal form every downstream stage (alignment, diffing,
//!   rendering) consumes;
//! - [`append_line_sentinels`] tags every input line with
//!   [`LINE_BREAK_SENTINEL`] so original line boundaries survive the
//!   whitespace collapse and can be turned back into `<br>` at render time.

mod clause;
mod sentinel;
mod whitespace;

pub use clause::{segment, Clause};
pub use sentinel::{append_line_sentinels, LINE_BREAK_SENTINEL};
pub use whitespace::collapse_whitespace;
