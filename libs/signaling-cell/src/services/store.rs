// libs/signaling-cell/src/services/store.rs
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::SignalingError;

/// Key-value contract behind the signaling endpoints.
///
/// `get` distinguishes a key that was never published (`Ok(None)`) from a store
/// that could not answer (`Err`). Writes are last-write-wins per key.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PeerIdStore: Send + Sync {
    async fn put(&self, appointment_id: &str, peer_id: &str) -> Result<(), SignalingError>;

    async fn get(&self, appointment_id: &str) -> Result<Option<String>, SignalingError>;

    async fn health_check(&self) -> Result<(), SignalingError>;

    fn backend(&self) -> &'static str;
}

/// Process-local store. Entries live until the process exits.
#[derive(Debug, Default)]
pub struct InMemoryPeerIdStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryPeerIdStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl PeerIdStore for InMemoryPeerIdStore {
    async fn put(&self, appointment_id: &str, peer_id: &str) -> Result<(), SignalingError> {
        let previous = self
            .entries
            .write()
            .await
            .insert(appointment_id.to_string(), peer_id.to_string());

        debug!(
            "Stored peer ID for appointment {} (replaced existing: {})",
            appointment_id,
            previous.is_some()
        );
        Ok(())
    }

    async fn get(&self, appointment_id: &str) -> Result<Option<String>, SignalingError> {
        Ok(self.entries.read().await.get(appointment_id).cloned())
    }

    async fn health_check(&self) -> Result<(), SignalingError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
