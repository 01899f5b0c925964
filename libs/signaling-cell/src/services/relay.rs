// libs/signaling-cell/src/services/relay.rs
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info};

use shared_config::{AppConfig, PeerStoreBackend};
use shared_utils::validation::present;

use crate::models::{
    FetchPeerIdQuery, PeerIdResponse, PublishPeerIdRequest, PublishPeerIdResponse,
    SignalingError, SignalingHealthResponse, StoreHealth,
};
use crate::services::redis_store::RedisPeerIdStore;
use crate::services::store::{InMemoryPeerIdStore, PeerIdStore};

/// Publish/fetch relay for connection ids, keyed by appointment.
pub struct SignalingService {
    store: Arc<dyn PeerIdStore>,
}

impl SignalingService {
    pub fn new(store: Arc<dyn PeerIdStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryPeerIdStore::new()))
    }

    /// Builds the service on the backend selected by `PEER_STORE_BACKEND`.
    pub async fn from_config(config: &AppConfig) -> Result<Self, SignalingError> {
        let store: Arc<dyn PeerIdStore> = match config.peer_store_backend {
            PeerStoreBackend::Memory => Arc::new(InMemoryPeerIdStore::new()),
            PeerStoreBackend::Redis => Arc::new(RedisPeerIdStore::from_config(config).await?),
        };

        info!("Signaling relay using {} peer store", store.backend());
        Ok(Self::new(store))
    }

    pub fn store_backend(&self) -> &'static str {
        self.store.backend()
    }

    pub async fn publish(
        &self,
        request: PublishPeerIdRequest,
    ) -> Result<PublishPeerIdResponse, SignalingError> {
        let (Some(appointment_id), Some(peer_id)) = (
            present(request.appointment_id.as_deref()),
            present(request.peer_id.as_deref()),
        ) else {
            return Err(SignalingError::Validation(
                "Missing appointmentId or peerId".to_string(),
            ));
        };

        self.store.put(appointment_id, peer_id).await.map_err(|e| {
            error!("Error storing peer ID for appointment {}: {}", appointment_id, e);
            e
        })?;

        debug!("Published peer ID for appointment {}", appointment_id);
        Ok(PublishPeerIdResponse { success: true })
    }

    pub async fn fetch(&self, query: FetchPeerIdQuery) -> Result<PeerIdResponse, SignalingError> {
        let appointment_id = present(query.appointment_id.as_deref())
            .ok_or_else(|| SignalingError::Validation("Missing appointmentId".to_string()))?;

        let peer_id = self.store.get(appointment_id).await.map_err(|e| {
            error!("Error retrieving peer ID for appointment {}: {}", appointment_id, e);
            e
        })?;

        match peer_id {
            Some(peer_id) if !peer_id.is_empty() => {
                debug!("Fetched peer ID for appointment {}", appointment_id);
                Ok(PeerIdResponse { peer_id })
            }
            _ => {
                debug!("No peer ID published yet for appointment {}", appointment_id);
                Err(SignalingError::NotFound)
            }
        }
    }

    pub async fn health(&self) -> SignalingHealthResponse {
        let status = match self.store.health_check().await {
            Ok(()) => StoreHealth::Healthy,
            Err(e) => {
                error!("Peer store health check failed: {}", e);
                StoreHealth::Unhealthy
            }
        };

        SignalingHealthResponse {
            status,
            store_backend: self.store_backend().to_string(),
            timestamp: Utc::now(),
        }
    }
}
