//! Clause alignment & diff rendering.
//!
//! The umbrella crate wires the stages together:
//!
//! 1. sentinel-tag and segment the original document;
//! 2. strip and window the revised HTML, then segment it;
//! 3. embed both clause lists (one batch per side, concurrently);
//! 4. align greedily inside a positional window;
//! 5. diff each matched pair and render every slot to styled HTML.
//!
//! Everything interesting lives in the member crates; [`compare`] is the
//! one call sites need. The member crates are re-exported so servers and
//! tools can depend on this crate alone.

pub use align::{AlignConfig, AlignError, AlignmentPlan, Slot};
pub use diffing::{diff, DiffKind, DiffSegment};
pub use extract::{extract_between_markers, html_to_text};
pub use segment::{append_line_sentinels, collapse_whitespace, Clause, LINE_BREAK_SENTINEL};
pub use semantic::{
    cosine_similarity, provider_for, EmbeddingProvider, SemanticConfig, SemanticError, StubProvider,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Inputs for one comparison run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    /// Original document, plain text.
    pub original_document: String,
    /// Revised document, as HTML.
    pub html_content: String,
    /// Marker that opens the comparison window in the revised text.
    pub start_marker: String,
    /// Marker that closes it.
    pub end_marker: String,
}

/// What a successful run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareOutcome {
    /// Full annotated HTML document.
    pub html: String,
    /// Human-readable summary.
    pub message: String,
    pub original_clauses: usize,
    pub revised_clauses: usize,
}

/// Failures surface whole: no partial HTML is ever produced, and nothing
/// here retries.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("embedding failed: {0}")]
    Embedding(#[from] SemanticError),

    #[error("alignment failed: {0}")]
    Alignment(#[from] AlignError),
}

/// Window radius for the aligner: generous enough to absorb the length
/// drift between the two sides, never below 5.
pub fn window_radius(original_len: usize, revised_len: usize) -> usize {
    let drift = (original_len as f64 - revised_len as f64).abs();
    (drift * 1.5 + 5.0).round() as usize
}

/// Run the whole pipeline for one request.
///
/// `cfg.window_radius` is normally left `None`, in which case the radius
/// comes from [`window_radius`]; a caller-supplied radius is passed through
/// untouched.
pub async fn compare(
    request: &CompareRequest,
    provider: &dyn EmbeddingProvider,
    cfg: &AlignConfig,
) -> Result<CompareOutcome, PipelineError> {
    let sentineled = segment::append_line_sentinels(&request.original_document);
    let original = segment::segment(&sentineled);

    let revised_text = extract::extract_between_markers(
        &request.html_content,
        &request.start_marker,
        &request.end_marker,
    );
    let revised = segment::segment(&revised_text);

    let n = original.len();
    let m = revised.len();
    debug!(original = n, revised = m, provider = provider.name(), "segmented both sides");

    let original_texts: Vec<String> = original.iter().map(|c| c.normalized_text.clone()).collect();
    let revised_texts: Vec<String> = revised.iter().map(|c| c.normalized_text.clone()).collect();

    // Both batches in flight at once; alignment needs both anyway.
    let (original_emb, revised_emb) = tokio::join!(
        provider.embed_batch(&original_texts),
        provider.embed_batch(&revised_texts),
    );
    let original_emb = original_emb?;
    let revised_emb = revised_emb?;

    let align_cfg = AlignConfig {
        window_radius: Some(cfg.window_radius.unwrap_or_else(|| window_radius(n, m))),
        threshold: cfg.threshold,
    };
    let plan = align::align(&original, &original_emb, &revised, &revised_emb, &align_cfg)?;
    debug!(matched = plan.matched_count(), slots = plan.slots.len(), "aligned");

    let rows: Vec<Option<String>> = plan
        .slots
        .iter()
        .map(|slot| {
            slot.map(|s| match s {
                Slot::Matched { original: i, revised: j } => {
                    let segments =
                        diffing::diff(&original[i].normalized_text, &revised[j].normalized_text);
                    render::render_matched(&segments)
                }
                Slot::Deleted { original: i } => {
                    render::render_deleted(&original[i].normalized_text)
                }
                Slot::Inserted { revised: j } => {
                    render::render_inserted(&revised[j].normalized_text)
                }
            })
        })
        .collect();

    let html = render::render_document(&rows);
    let message = format!(
        "Comparison completed successfully. Processed {n} original clauses and {m} revised clauses."
    );
    Ok(CompareOutcome {
        html,
        message,
        original_clauses: n,
        revised_clauses: m,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_floor_is_five() {
        assert_eq!(window_radius(10, 10), 5);
        assert_eq!(window_radius(0, 0), 5);
    }

    #[test]
    fn radius_grows_with_length_drift() {
        assert_eq!(window_radius(10, 12), 8);
        assert_eq!(window_radius(12, 10), 8);
        // 1.5 * 1 + 5 = 6.5 rounds away from zero.
        assert_eq!(window_radius(3, 4), 7);
    }

    #[test]
    fn radius_is_symmetric() {
        for (a, b) in [(0, 9), (4, 40), (100, 3)] {
            assert_eq!(window_radius(a, b), window_radius(b, a));
        }
    }
}
