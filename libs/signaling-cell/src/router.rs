// libs/signaling-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::*;
use crate::services::SignalingService;

/// Creates the signaling routes.
///
/// The `/notifications/*` paths are kept for older clients and share the one store.
pub fn signaling_routes(service: Arc<SignalingService>) -> Router {
    Router::new()
        .route("/peer-id", post(publish_peer_id).get(fetch_peer_id))
        .route(
            "/notifications/send-peer-id",
            post(publish_peer_id).get(fetch_peer_id),
        )
        .route("/notifications/get-peer-id", get(fetch_peer_id))
        .route("/signaling/health", get(signaling_health_check))
        .with_state(service)
}
