use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// The roadline HTTP service.
pub struct RoadlineServer {
    config: ServerConfig,
}

impl RoadlineServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router over a freshly opened stack (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        let state = AppState::from_config(&self.config)?;
        build_router(state, &self.config)
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!("roadline server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
