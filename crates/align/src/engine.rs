use std::collections::HashSet;

use segment::Clause;
use semantic::cosine_similarity;

use crate::types::{AlignConfig, AlignError, AlignmentPlan, Slot, DEFAULT_WINDOW_RADIUS};

/// Align `original` against `revised` using per-clause embeddings.
///
/// Originals are visited in ascending order. For original `i` the candidate
/// window is `[max(0, i - r), min(M, i + r + 1))` over revised indices; the
/// stable argmax of cosine similarity wins when it is strictly above the
/// threshold and not yet claimed (exact ties keep the lowest revised
/// index). If the closest candidate is already claimed the original counts
/// as deleted; no second-best is considered. An empty window (tiny radius,
/// much shorter revised side) also counts as deleted.
///
/// Unclaimed revised clauses land at their own index when that slot is
/// still free, otherwise they are appended after everything else.
///
/// Edge rules checked in this order: empty original yields an empty plan
/// regardless of the revised side; empty revised yields one deleted slot
/// per original.
pub fn align(
    original: &[Clause],
    original_embeddings: &[Vec<f32>],
    revised: &[Clause],
    revised_embeddings: &[Vec<f32>],
    cfg: &AlignConfig,
) -> Result<AlignmentPlan, AlignError> {
    cfg.validate()?;
    if original.len() != original_embeddings.len() {
        return Err(AlignError::EmbeddingCountMismatch {
            side: "original",
            clauses: original.len(),
            embeddings: original_embeddings.len(),
        });
    }
    if revised.len() != revised_embeddings.len() {
        return Err(AlignError::EmbeddingCountMismatch {
            side: "revised",
            clauses: revised.len(),
            embeddings: revised_embeddings.len(),
        });
    }

    let n = original.len();
    let m = revised.len();

    if n == 0 {
        return Ok(AlignmentPlan {
            slots: Vec::new(),
            pairs: Vec::new(),
        });
    }
    if m == 0 {
        let slots = (0..n).map(|i| Some(Slot::Deleted { original: i })).collect();
        return Ok(AlignmentPlan {
            slots,
            pairs: Vec::new(),
        });
    }

    let radius = cfg.window_radius.unwrap_or(DEFAULT_WINDOW_RADIUS);
    let mut slots: Vec<Option<Slot>> = vec![None; n.max(m)];
    let mut claimed: HashSet<usize> = HashSet::new();
    let mut pairs: Vec<(usize, usize)> = Vec::new();

    for i in 0..n {
        let lo = i.saturating_sub(radius);
        let hi = (i + radius + 1).min(m);

        let mut best: Option<(usize, f32)> = None;
        for j in lo..hi {
            let sim = cosine_similarity(&original_embeddings[i], &revised_embeddings[j]);
            match best {
                Some((_, top)) if sim <= top => {}
                _ => best = Some((j, sim)),
            }
        }

        match best {
            Some((j, sim)) if sim > cfg.threshold && !claimed.contains(&j) => {
                claimed.insert(j);
                pairs.push((i, j));
                slots[i] = Some(Slot::Matched {
                    original: i,
                    revised: j,
                });
            }
            _ => slots[i] = Some(Slot::Deleted { original: i }),
        }
    }

    for j in 0..m {
        if claimed.contains(&j) {
            continue;
        }
        if slots[j].is_none() {
            slots[j] = Some(Slot::Inserted { revised: j });
        } else {
            slots.push(Some(Slot::Inserted { revised: j }));
        }
    }

    Ok(AlignmentPlan { slots, pairs })
}
