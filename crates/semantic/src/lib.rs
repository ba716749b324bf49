//! Embedding generation for clause alignment.
//!
//! Two providers hide behind one async seam, [`EmbeddingProvider`]:
//!
//! - [`ApiProvider`] posts a whole batch to a hosted feature-extraction
//!   endpoint (one request per document side, one vector per input text);
//! - [`StubProvider`] derives deterministic vectors from token hashes, so
//!   tests and local runs need no network and no model weights.
//!
//! [`provider_for`] picks between them from a [`SemanticConfig`];
//! [`cosine_similarity`] is the distance the aligner uses.

mod api;
mod config;
mod error;
mod normalize;
mod provider;
mod stub;

use std::sync::Arc;

pub use api::ApiProvider;
pub use config::{SemanticConfig, DEFAULT_MODEL};
pub use error::SemanticError;
pub use normalize::cosine_similarity;
pub use provider::EmbeddingProvider;
pub use stub::StubProvider;

/// Build the provider a config asks for.
///
/// `"api"` mode needs an `api_url`; anything else (including a missing URL)
/// falls back to the stub so local runs never touch the network.
pub fn provider_for(cfg: &SemanticConfig) -> Result<Arc<dyn EmbeddingProvider>, SemanticError> {
    cfg.validate()?;
    match (cfg.mode.as_str(), cfg.api_url.as_deref()) {
        ("api", Some(_)) => Ok(Arc::new(ApiProvider::from_config(cfg)?)),
        _ => Ok(Arc::new(StubProvider::new(cfg.dim, cfg.normalize))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_selects_the_stub() {
        let provider = provider_for(&SemanticConfig::default()).unwrap();
        assert_eq!(provider.name(), "stub");
    }

    #[test]
    fn api_mode_without_url_falls_back_to_stub() {
        let cfg = SemanticConfig {
            mode: "api".into(),
            ..SemanticConfig::default()
        };
        let provider = provider_for(&cfg).unwrap();
        assert_eq!(provider.name(), "stub");
    }

    #[test]
    fn api_mode_with_url_selects_the_api() {
        let cfg = SemanticConfig {
            mode: "api".into(),
            api_url: Some("https://example.invalid/embed".into()),
            ..SemanticConfig::default()
        };
        let provider = provider_for(&cfg).unwrap();
        assert_eq!(provider.name(), "api");
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let cfg = SemanticConfig {
            mode: "quantum".into(),
            ..SemanticConfig::default()
        };
        assert!(matches!(
            provider_for(&cfg),
            Err(SemanticError::InvalidConfig(_))
        ));
    }
}
