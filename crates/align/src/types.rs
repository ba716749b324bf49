use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Window radius used when the caller does not supply one.
pub const DEFAULT_WINDOW_RADIUS: usize = 3;

/// Strict lower bound on cosine similarity for a pair to count as matched.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignConfig {
    /// Search radius around the diagonal; `None` means
    /// [`DEFAULT_WINDOW_RADIUS`].
    pub window_radius: Option<usize>,
    /// Similarity must be strictly greater than this to match.
    pub threshold: f32,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            window_radius: None,
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl AlignConfig {
    pub fn validate(&self) -> Result<(), AlignError> {
        if !self.threshold.is_finite() || !(-1.0..=1.0).contains(&self.threshold) {
            return Err(AlignError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum AlignError {
    #[error("match threshold {0} is outside [-1, 1]")]
    InvalidThreshold(f32),

    #[error("{side} side has {clauses} clauses but {embeddings} embeddings")]
    EmbeddingCountMismatch {
        side: &'static str,
        clauses: usize,
        embeddings: usize,
    },
}

/// What occupies one output slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slot {
    /// Original clause paired with a revised clause.
    Matched { original: usize, revised: usize },
    /// Original clause with no surviving counterpart.
    Deleted { original: usize },
    /// Revised clause with no original counterpart.
    Inserted { revised: usize },
}

/// The slot layout the renderer walks, plus the matched pairs.
///
/// Slots can be `None`: a revised-side position whose clause was claimed by
/// a match stays empty and contributes nothing downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentPlan {
    pub slots: Vec<Option<Slot>>,
    /// `(original, revised)` index pairs, in original order.
    pub pairs: Vec<(usize, usize)>,
}

impl AlignmentPlan {
    pub fn matched_count(&self) -> usize {
        self.pairs.len()
    }
}
