use thiserror::Error;

#[derive(Debug, Error)]
pub enum SemanticError {
    #[error("invalid semantic config: {0}")]
    InvalidConfig(String),

    #[error("embedding request failed: {0}")]
    Http(String),

    #[error("malformed embedding response: {0}")]
    MalformedResponse(String),
}
