use async_trait::async_trait;

use crate::SemanticError;

/// The batching seam between the pipeline and whatever produces vectors.
///
/// Implementations must return exactly one vector per input text, in input
/// order, and must not retry internally: a failed batch surfaces as one
/// error and the caller decides what to do with it.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, SemanticError>;

    /// Short identifier for logs.
    fn name(&self) -> &'static str;
}
