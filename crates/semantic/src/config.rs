use serde::{Deserialize, Serialize};

use crate::SemanticError;

/// Model the hosted endpoint serves by default.
pub const DEFAULT_MODEL: &str = "mixedbread-ai/mxbai-embed-large-v1";

/// Provider selection and tuning.
///
/// All fields have serde defaults so partial configs (or none at all) work;
/// the default is the offline stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticConfig {
    /// `"api"` for the hosted endpoint, `"fast"` for the deterministic stub.
    pub mode: String,
    /// Model identifier, informational for `"fast"` mode.
    pub model: String,
    /// Feature-extraction endpoint URL. Required for `"api"` mode.
    pub api_url: Option<String>,
    /// Bearer token for the endpoint, if it needs one.
    pub api_key: Option<String>,
    /// Per-request timeout for the endpoint.
    pub timeout_secs: u64,
    /// Dimensionality of stub vectors.
    pub dim: usize,
    /// L2-normalize vectors before returning them.
    pub normalize: bool,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            mode: "fast".to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_url: None,
            api_key: None,
            timeout_secs: 30,
            dim: 384,
            normalize: true,
        }
    }
}

impl SemanticConfig {
    pub fn validate(&self) -> Result<(), SemanticError> {
        match self.mode.as_str() {
            "fast" | "api" => {}
            other => {
                return Err(SemanticError::InvalidConfig(format!(
                    "unknown embedding mode `{other}` (expected `fast` or `api`)"
                )))
            }
        }
        if self.dim == 0 {
            return Err(SemanticError::InvalidConfig(
                "embedding dim must be non-zero".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(SemanticError::InvalidConfig(
                "timeout_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
