//! DevPulse Web API
//!
//! Axum-based REST API over the collector and metrics core.

mod handlers;
mod routes;

pub use routes::create_router;

use devpulse_collector::github::GithubClient;
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    pub client: GithubClient,
}

impl AppState {
    pub fn new(client: GithubClient) -> Self {
        Self { client }
    }
}

pub type SharedState = Arc<AppState>;
