//! Character-level diffing between two clause texts.
//!
//! [`diff`] produces a minimal edit script (Myers, with common prefix and
//! suffix trimmed first) and then runs two cleanup passes that trade a little
//! minimality for human-readable output: short equalities sandwiched between
//! larger edits are folded into them, and single edits are slid toward
//! whitespace and punctuation boundaries.
//!
//! Invariants, preserved by every pass: concatenating the `Equal` and
//! `Delete` segments in order reproduces the first input; `Equal` and
//! `Insert` reproduce the second.

mod cleanup;
mod myers;

use serde::{Deserialize, Serialize};

/// How a [`DiffSegment`] relates the two inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Present in both inputs.
    Equal,
    /// Present only in the second input.
    Insert,
    /// Present only in the first input.
    Delete,
}

/// One maximal run of characters sharing a [`DiffKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    pub kind: DiffKind,
    pub text: String,
}

impl DiffSegment {
    pub fn new(kind: DiffKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub(crate) fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Diff `a` against `b` at character granularity.
pub fn diff(a: &str, b: &str) -> Vec<DiffSegment> {
    if a == b {
        if a.is_empty() {
            return Vec::new();
        }
        return vec![DiffSegment::new(DiffKind::Equal, a)];
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let prefix = common_prefix(&a_chars, &b_chars);
    let suffix = common_suffix(&a_chars[prefix..], &b_chars[prefix..]);

    let mid_a = &a_chars[prefix..a_chars.len() - suffix];
    let mid_b = &b_chars[prefix..b_chars.len() - suffix];

    let mut segments = Vec::new();
    if prefix > 0 {
        segments.push(DiffSegment::new(
            DiffKind::Equal,
            a_chars[..prefix].iter().collect::<String>(),
        ));
    }
    segments.extend(myers::diff_chars(mid_a, mid_b));
    if suffix > 0 {
        segments.push(DiffSegment::new(
            DiffKind::Equal,
            a_chars[a_chars.len() - suffix..].iter().collect::<String>(),
        ));
    }

    cleanup::merge(&mut segments);
    cleanup::semantic(&mut segments);
    segments
}

/// Reassemble the first input from a segment list.
pub fn reconstruct_a(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .filter(|s| s.kind != DiffKind::Insert)
        .map(|s| s.text.as_str())
        .collect()
}

/// Reassemble the second input from a segment list.
pub fn reconstruct_b(segments: &[DiffSegment]) -> String {
    segments
        .iter()
        .filter(|s| s.kind != DiffKind::Delete)
        .map(|s| s.text.as_str())
        .collect()
}

pub(crate) fn common_prefix(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

pub(crate) fn common_suffix(a: &[char], b: &[char]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}
