use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler;
use crate::state::AppState;

/// Build the axum router with all roadline endpoints.
pub fn build_router(state: AppState, config: &ServerConfig) -> ServerResult<Router> {
    let mut router = Router::new()
        .route("/test", get(handler::test_handler))
        .route("/storeTraffic", post(handler::store_traffic))
        .route("/storeAccident", post(handler::store_accident))
        .route("/retrieveTraffic/:cid", get(handler::retrieve_traffic))
        .route("/retrieveAccident/:cid", get(handler::retrieve_accident))
        .route(
            "/ledger/:category",
            post(handler::ledger_record).get(handler::ledger_latest),
        )
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = &config.cors_origin {
        let origin = origin
            .parse::<HeaderValue>()
            .map_err(|e| ServerError::Config(format!("invalid CORS origin: {e}")))?;
        router = router.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        );
    }

    Ok(router.with_state(state))
}
