use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;

use crate::config::SemanticConfig;
use crate::normalize::l2_normalize_in_place;
use crate::{EmbeddingProvider, SemanticError};

/// One client for the whole process so connection pools are shared across
/// batches and requests.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// Hosted feature-extraction provider.
///
/// Sends the entire batch in one request (`{"inputs": [...]}`) and expects a
/// JSON array with one vector per input, in order. Exactly one attempt per
/// batch; failures are reported, never retried here.
pub struct ApiProvider {
    url: String,
    api_key: Option<String>,
    timeout: Duration,
    normalize: bool,
}

impl ApiProvider {
    pub fn from_config(cfg: &SemanticConfig) -> Result<Self, SemanticError> {
        let url = cfg
            .api_url
            .clone()
            .ok_or_else(|| SemanticError::InvalidConfig("api mode requires api_url".to_string()))?;
        Ok(Self {
            url,
            api_key: cfg.api_key.clone(),
            timeout: Duration::from_secs(cfg.timeout_secs),
            normalize: cfg.normalize,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for ApiProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, SemanticError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let payload = serde_json::json!({ "inputs": texts });
        let mut request = HTTP_CLIENT
            .post(&self.url)
            .timeout(self.timeout)
            .json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SemanticError::Http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SemanticError::Http(format!("status {status}: {body}")));
        }

        let mut vectors: Vec<Vec<f32>> = response
            .json()
            .await
            .map_err(|e| SemanticError::MalformedResponse(e.to_string()))?;
        if vectors.len() != texts.len() {
            return Err(SemanticError::MalformedResponse(format!(
                "expected {} vectors, got {}",
                texts.len(),
                vectors.len()
            )));
        }
        if self.normalize {
            for v in vectors.iter_mut() {
                l2_normalize_in_place(v);
            }
        }
        Ok(vectors)
    }

    fn name(&self) -> &'static str {
        "api"
    }
}
