//! HTTP API for clause comparison.
//!
//! One substantial endpoint (`POST /api/v1/compare`) plus liveness and API
//! info. The embedding provider is constructed once at startup and shared
//! behind [`state::ServerState`]; everything else is per-request.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
