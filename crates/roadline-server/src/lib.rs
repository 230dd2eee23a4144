//! HTTP service for roadline.
//!
//! Exposes the record store, issued-identifier index, and ledger over REST:
//! category-specific store/retrieve endpoints, a liveness probe, and the
//! ledger's latest-identifier slots. CORS is restricted to the configured
//! frontend origin; requests are traced via `tower-http`.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use handler::{AnchorRequest, AnchorResponse, LivenessResponse, StoreResponse};
pub use server::RoadlineServer;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    /// A router over a throwaway data directory, CORS disabled.
    fn test_app() -> (TempDir, Router) {
        let dir = TempDir::new().unwrap();
        let config = ServerConfig {
            data_dir: dir.path().to_path_buf(),
            cors_origin: None,
            ..Default::default()
        };
        let app = RoadlineServer::new(config).router().unwrap();
        (dir, app)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_endpoint_reports_liveness() {
        let (_dir, app) = test_app();
        let response = app.oneshot(get("/test")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Server is running!");
    }

    #[tokio::test]
    async fn store_then_retrieve_roundtrip() {
        let (_dir, app) = test_app();
        let record = json!({"timestamp": 152.0, "vehicles": [{"id": "veh0", "speed": 13.9}]});

        let response = app
            .clone()
            .oneshot(post_json("/storeTraffic", &record.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let cid = body["cid"].as_str().expect("cid in response").to_string();

        let response = app
            .oneshot(get(&format!("/retrieveTraffic/{cid}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, record);
    }

    #[tokio::test]
    async fn accident_endpoints_are_independent_of_traffic() {
        let (_dir, app) = test_app();
        let record = json!({"severity": "major", "location": [48.1, 11.5]});

        let response = app
            .clone()
            .oneshot(post_json("/storeAccident", &record.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let cid = body_json(response).await["cid"]
            .as_str()
            .unwrap()
            .to_string();

        // Issued for accident, so the traffic endpoint does not know it.
        let response = app
            .clone()
            .oneshot(get(&format!("/retrieveTraffic/{cid}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(get(&format!("/retrieveAccident/{cid}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, record);
    }

    #[tokio::test]
    async fn empty_object_body_is_rejected() {
        let (_dir, app) = test_app();
        for uri in ["/storeTraffic", "/storeAccident"] {
            let response = app.clone().oneshot(post_json(uri, "{}")).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let body = body_json(response).await;
            assert!(body["error"].as_str().is_some());
        }
    }

    #[tokio::test]
    async fn truly_empty_body_is_rejected() {
        let (_dir, app) = test_app();
        let response = app.oneshot(post_json("/storeTraffic", "")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn never_issued_identifier_is_404() {
        let (_dir, app) = test_app();

        // Well-formed but never issued.
        let ghost = roadline_types::Cid::for_content(b"never stored").to_hex();
        let response = app
            .clone()
            .oneshot(get(&format!("/retrieveTraffic/{ghost}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Not even a well-formed identifier.
        let response = app
            .oneshot(get("/retrieveAccident/not-a-cid"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn ledger_roundtrip_per_category() {
        let (_dir, app) = test_app();

        for category in ["traffic", "accident"] {
            let uri = format!("/ledger/{category}");

            // Nothing anchored yet.
            let response = app.clone().oneshot(get(&uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);

            let anchor = json!({"cid": format!("{category}-latest")});
            let response = app
                .clone()
                .oneshot(post_json(&uri, &anchor.to_string()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            let response = app.clone().oneshot(get(&uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body = body_json(response).await;
            assert_eq!(body["cid"], format!("{category}-latest"));
        }
    }

    #[tokio::test]
    async fn ledger_overwrites_previous_anchor() {
        let (_dir, app) = test_app();

        for cid in ["first", "second"] {
            let body = json!({"cid": cid}).to_string();
            let response = app
                .clone()
                .oneshot(post_json("/ledger/traffic", &body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.oneshot(get("/ledger/traffic")).await.unwrap();
        assert_eq!(body_json(response).await["cid"], "second");
    }

    #[tokio::test]
    async fn ledger_rejects_empty_identifier() {
        let (_dir, app) = test_app();

        for category in ["traffic", "accident"] {
            let response = app
                .clone()
                .oneshot(post_json(&format!("/ledger/{category}"), r#"{"cid": ""}"#))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let body = body_json(response).await;
            assert!(body["error"]
                .as_str()
                .unwrap()
                .contains("content identifier cannot be empty"));
        }
    }

    #[tokio::test]
    async fn unknown_ledger_category_is_404() {
        let (_dir, app) = test_app();
        let response = app.oneshot(get("/ledger/weather")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn anchor_on_store_records_latest() {
        let dir = TempDir::new().unwrap();
        let config = ServerConfig {
            data_dir: dir.path().to_path_buf(),
            cors_origin: None,
            anchor_on_store: true,
            ..Default::default()
        };
        let app = RoadlineServer::new(config).router().unwrap();

        let record = json!({"timestamp": 152.0, "vehicles": [{"id": "veh0"}]});
        let response = app
            .clone()
            .oneshot(post_json("/storeTraffic", &record.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let cid = body_json(response).await["cid"].as_str().unwrap().to_string();

        let response = app.oneshot(get("/ledger/traffic")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["cid"], cid);
    }
}
