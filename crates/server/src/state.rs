use std::sync::Arc;

use semantic::EmbeddingProvider;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Shared server state.
///
/// The embedding provider is built exactly once, at startup, and shared by
/// every request; provider construction is the only fallible part, so a bad
/// semantic config fails the boot instead of the first request.
pub struct ServerState {
    pub config: ServerConfig,
    pub provider: Arc<dyn EmbeddingProvider>,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let provider = semantic::provider_for(&config.semantic)?;
        tracing::info!(provider = provider.name(), "embedding provider ready");
        Ok(Self { config, provider })
    }

    /// Alignment settings derived from the config; the pipeline fills in
    /// the window radius per request.
    pub fn align_config(&self) -> align::AlignConfig {
        align::AlignConfig {
            window_radius: None,
            threshold: self.config.match_threshold,
        }
    }
}
