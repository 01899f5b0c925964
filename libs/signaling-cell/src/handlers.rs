// libs/signaling-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::error;

use shared_models::error::AppError;

use crate::models::{
    FetchPeerIdQuery, PeerIdResponse, PublishPeerIdRequest, PublishPeerIdResponse,
    SignalingError, SignalingHealthResponse,
};
use crate::services::SignalingService;

fn map_signaling_error(e: SignalingError, store_failure: &str) -> AppError {
    match e {
        SignalingError::Validation(message) => AppError::ValidationError(message),
        SignalingError::NotFound => {
            AppError::NotFound("Peer ID not found for this appointment".to_string())
        }
        SignalingError::NotConfigured(message) => AppError::Internal(message),
        SignalingError::Store(_) | SignalingError::Redis(_) => {
            error!("{}: {}", store_failure, e);
            AppError::Internal(store_failure.to_string())
        }
    }
}

// ==============================================================================
// SIGNALING HANDLERS
// ==============================================================================

/// Publish the caller's connection id for an appointment.
///
/// The body is read as JSON whatever the `Content-Type` header says.
#[axum::debug_handler]
pub async fn publish_peer_id(
    State(service): State<Arc<SignalingService>>,
    body: Bytes,
) -> Result<Json<PublishPeerIdResponse>, AppError> {
    let request: PublishPeerIdRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::ValidationError(format!("Invalid request body: {}", e)))?;

    let response = service
        .publish(request)
        .await
        .map_err(|e| map_signaling_error(e, "Failed to store peer ID"))?;

    Ok(Json(response))
}

/// Fetch the connection id published for an appointment
#[axum::debug_handler]
pub async fn fetch_peer_id(
    State(service): State<Arc<SignalingService>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<PeerIdResponse>, AppError> {
    let Query(pairs) = query.map_err(|rejection| {
        AppError::ValidationError(format!("Invalid query: {}", rejection.body_text()))
    })?;

    let response = service
        .fetch(FetchPeerIdQuery::from_pairs(&pairs))
        .await
        .map_err(|e| map_signaling_error(e, "Failed to retrieve peer ID"))?;

    Ok(Json(response))
}

/// Relay health, including reachability of the backing store
#[axum::debug_handler]
pub async fn signaling_health_check(
    State(service): State<Arc<SignalingService>>,
) -> Json<SignalingHealthResponse> {
    Json(service.health().await)
}
