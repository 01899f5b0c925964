// libs/signaling-cell/src/models.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==============================================================================
// SIGNALING REQUEST / RESPONSE MODELS
// ==============================================================================

/// Body of `POST /peer-id`.
///
/// Fields are optional at the serde level so that a missing field surfaces as a
/// validation error with a useful message instead of a generic body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishPeerIdRequest {
    #[serde(default)]
    pub appointment_id: Option<String>,
    #[serde(default)]
    pub peer_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublishPeerIdResponse {
    pub success: bool,
}

/// Query of `GET /peer-id`.
#[derive(Debug, Clone, Default)]
pub struct FetchPeerIdQuery {
    pub appointment_id: Option<String>,
}

impl FetchPeerIdQuery {
    pub const APPOINTMENT_ID: &'static str = "appointmentId";

    /// First `appointmentId` wins when the key is repeated.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            appointment_id: pairs
                .iter()
                .find(|(key, _)| key == Self::APPOINTMENT_ID)
                .map(|(_, value)| value.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeerIdResponse {
    pub peer_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum StoreHealth {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalingHealthResponse {
    pub status: StoreHealth,
    pub store_backend: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Error, Debug)]
pub enum SignalingError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Peer ID not found for this appointment")]
    NotFound,

    #[error("Peer store error: {0}")]
    Store(String),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Signaling not configured: {0}")]
    NotConfigured(String),
}

impl SignalingError {
    /// True for failures of the backing store rather than of the request.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, SignalingError::Store(_) | SignalingError::Redis(_))
    }
}
