use std::net::SocketAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use align::DEFAULT_MATCH_THRESHOLD;
use semantic::SemanticConfig;

/// Server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Similarity a clause pair must strictly exceed to count as matched
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f32,

    /// Embedding provider settings
    #[serde(default)]
    pub semantic: SemanticConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            match_threshold: default_match_threshold(),
            semantic: SemanticConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional `clausediff.*` config file, then
    /// override with `CLAUSEDIFF_SERVER__*` environment variables (double
    /// underscore separates nesting, e.g.
    /// `CLAUSEDIFF_SERVER__SEMANTIC__API_URL`).
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("clausediff").required(false))
            .add_source(config::Environment::with_prefix("CLAUSEDIFF_SERVER").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Socket address to bind to.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_max_body_size_mb() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_match_threshold() -> f32 {
    DEFAULT_MATCH_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.timeout_secs, 60);
        assert_eq!(cfg.max_body_size_mb, 10);
        assert!(cfg.enable_cors);
        assert_eq!(cfg.match_threshold, 0.5);
        assert_eq!(cfg.semantic.mode, "fast");
    }

    #[test]
    fn socket_addr_parses() {
        let cfg = ServerConfig {
            bind_addr: "127.0.0.1".to_string(),
            port: 9999,
            ..ServerConfig::default()
        };
        assert_eq!(cfg.socket_addr().unwrap().to_string(), "127.0.0.1:9999");
    }

    #[test]
    fn max_body_size_converts_to_bytes() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.max_body_size(), 10 * 1024 * 1024);
    }

    #[test]
    fn deserializes_nested_semantic_section() {
        let cfg: ServerConfig = serde_json::from_str(
            r#"{"port": 9000, "semantic": {"mode": "api", "api_url": "http://embed.local"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.semantic.mode, "api");
        assert_eq!(cfg.semantic.api_url.as_deref(), Some("http://embed.local"));
    }
}
