use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use roadline_sdk::{SdkError, SdkResult};
use roadline_types::{Cid, RecordCategory};

use crate::error::ApiError;
use crate::state::AppState;

/// Liveness probe response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub message: String,
}

impl Default for LivenessResponse {
    fn default() -> Self {
        Self {
            message: "Server is running!".into(),
        }
    }
}

/// Response to a successful store: the issued identifier.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreResponse {
    pub cid: String,
}

/// Body of a ledger write.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnchorRequest {
    pub cid: String,
}

/// The currently anchored identifier for a category.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnchorResponse {
    pub cid: String,
}

/// Liveness probe handler.
pub async fn test_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse::default())
}

pub async fn store_traffic(
    State(state): State<AppState>,
    Json(record): Json<Value>,
) -> Result<Json<StoreResponse>, ApiError> {
    store_record(state, RecordCategory::Traffic, record).await
}

pub async fn store_accident(
    State(state): State<AppState>,
    Json(record): Json<Value>,
) -> Result<Json<StoreResponse>, ApiError> {
    store_record(state, RecordCategory::Accident, record).await
}

pub async fn retrieve_traffic(
    State(state): State<AppState>,
    Path(cid): Path<String>,
) -> Result<Json<Value>, ApiError> {
    retrieve_record(state, RecordCategory::Traffic, cid).await
}

pub async fn retrieve_accident(
    State(state): State<AppState>,
    Path(cid): Path<String>,
) -> Result<Json<Value>, ApiError> {
    retrieve_record(state, RecordCategory::Accident, cid).await
}

/// `POST /ledger/:category`: anchor an identifier as the category's latest.
pub async fn ledger_record(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(request): Json<AnchorRequest>,
) -> Result<Json<AnchorResponse>, ApiError> {
    let category = parse_category(&category)?;
    let roadline = Arc::clone(&state.roadline);
    let cid = request.cid;

    let anchored = run_blocking(move || {
        roadline.anchor(category, &cid)?;
        Ok(cid)
    })
    .await?;

    tracing::info!(%category, cid = %anchored, "anchored identifier");
    Ok(Json(AnchorResponse { cid: anchored }))
}

/// `GET /ledger/:category`: the category's latest anchored identifier.
pub async fn ledger_latest(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<AnchorResponse>, ApiError> {
    let category = parse_category(&category)?;
    let roadline = Arc::clone(&state.roadline);

    let latest = run_blocking(move || roadline.latest_anchor(category)).await?;
    latest
        .map(|cid| Json(AnchorResponse { cid }))
        .ok_or_else(|| ApiError::not_found("no identifier anchored for this category"))
}

async fn store_record(
    state: AppState,
    category: RecordCategory,
    record: Value,
) -> Result<Json<StoreResponse>, ApiError> {
    let roadline = Arc::clone(&state.roadline);
    let anchor = state.anchor_on_store;

    let cid = run_blocking(move || {
        let cid = roadline.store_record(category, &record)?;
        if anchor {
            roadline.anchor(category, &cid.to_hex())?;
        }
        Ok(cid)
    })
    .await?;

    tracing::info!(%category, cid = %cid.short_hex(), "stored record");
    Ok(Json(StoreResponse { cid: cid.to_hex() }))
}

async fn retrieve_record(
    state: AppState,
    category: RecordCategory,
    cid: String,
) -> Result<Json<Value>, ApiError> {
    // An identifier that does not even parse was never issued by this
    // service, so it gets the same 404 as any other unknown identifier.
    let Ok(cid) = Cid::from_hex(&cid) else {
        return Err(SdkError::UnknownCid.into());
    };

    let roadline = Arc::clone(&state.roadline);
    let record = run_blocking(move || roadline.retrieve_record(category, &cid)).await?;
    Ok(Json(record))
}

fn parse_category(raw: &str) -> Result<RecordCategory, ApiError> {
    raw.parse::<RecordCategory>()
        .map_err(|e| ApiError::not_found(e.to_string()))
}

/// Run a synchronous stack operation off the async executor.
async fn run_blocking<T, F>(op: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> SdkResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|e| ApiError::internal(format!("task failed: {e}")))?
        .map_err(ApiError::from)
}
