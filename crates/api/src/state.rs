use std::sync::Arc;

use trailers_core::service::TrailerService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The service is a
/// trait object so the catalog backing the server is substitutable in tests.
#[derive(Clone)]
pub struct AppState {
    /// The injected trailer service all handlers delegate to.
    pub service: Arc<dyn TrailerService>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
