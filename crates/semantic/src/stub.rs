use async_trait::async_trait;
use fxhash::hash64;

use crate::normalize::l2_normalize_in_place;
use crate::{EmbeddingProvider, SemanticError};

/// Deterministic offline provider.
///
/// Every whitespace token contributes a fixed pseudo-random sinusoid to the
/// vector, so texts that share most of their tokens land close in cosine
/// space while disjoint texts do not. Good enough for tests and local
/// development; not a real embedding model.
#[derive(Debug, Clone)]
pub struct StubProvider {
    dim: usize,
    normalize: bool,
}

impl StubProvider {
    pub fn new(dim: usize, normalize: bool) -> Self {
        Self { dim, normalize }
    }

    fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut v = vec![0.0f32; self.dim];
        for token in text.split_whitespace() {
            let h = hash64(&token);
            for (i, slot) in v.iter_mut().enumerate() {
                let seed = (h >> (i % 32)) as u32;
                *slot += (seed as f32 * 1e-4 + i as f32 * 0.37).sin();
            }
        }
        if self.normalize {
            l2_normalize_in_place(&mut v);
        }
        v
    }
}

#[async_trait]
impl EmbeddingProvider for StubProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, SemanticError> {
        Ok(texts.iter().map(|t| self.embed_text(t)).collect())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosine_similarity;

    fn embed(texts: &[&str]) -> Vec<Vec<f32>> {
        let provider = StubProvider::new(384, true);
        let owned: Vec<String> = texts.iter().map(|s| s.to_string()).collect();
        futures_block(provider.embed_batch(&owned)).unwrap()
    }

    // Tiny block_on so the stub's async seam can be exercised without a
    // full runtime in unit tests.
    fn futures_block<F: std::future::Future>(fut: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(fut)
    }

    #[test]
    fn identical_text_is_deterministic() {
        let vs = embed(&["C1. Payment is due.", "C1. Payment is due."]);
        assert_eq!(vs[0], vs[1]);
    }

    #[test]
    fn vectors_are_unit_length() {
        let vs = embed(&["some clause text"]);
        let norm: f32 = vs[0].iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-4);
    }

    #[test]
    fn token_overlap_scores_high() {
        let vs = embed(&[
            "C2. The fee is $100.",
            "C2. The fee is $200.",
            "C9. Entirely unrelated warranty period provisions.",
        ]);
        let near = cosine_similarity(&vs[0], &vs[1]);
        let far = cosine_similarity(&vs[0], &vs[2]);
        assert!(near > 0.5, "near-duplicates should clear 0.5, got {near}");
        assert!(far < near, "unrelated text should score lower ({far} vs {near})");
    }

    #[test]
    fn empty_text_embeds_to_zero_vector() {
        let vs = embed(&[""]);
        assert!(vs[0].iter().all(|x| *x == 0.0));
    }

    #[test]
    fn batch_preserves_order_and_length() {
        let vs = embed(&["a", "b", "c"]);
        assert_eq!(vs.len(), 3);
        assert_ne!(vs[0], vs[1]);
    }
}
