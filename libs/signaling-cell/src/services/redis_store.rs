// libs/signaling-cell/src/services/redis_store.rs
use async_trait::async_trait;
use deadpool_redis::{Config, Connection, Pool, Runtime};
use redis::AsyncCommands;
use tracing::{debug, error, info};

use shared_config::AppConfig;

use crate::models::SignalingError;
use crate::services::store::PeerIdStore;

/// Peer-id store shared by every API instance pointed at the same Redis.
///
/// Keys are `{prefix}{appointment_id}` and carry no expiry.
pub struct RedisPeerIdStore {
    pool: Pool,
    key_prefix: String,
}

impl RedisPeerIdStore {
    pub async fn new(redis_url: &str, key_prefix: impl Into<String>) -> Result<Self, SignalingError> {
        let cfg = Config::from_url(redis_url);
        let pool = cfg.create_pool(Some(Runtime::Tokio1)).map_err(|e| {
            SignalingError::Store(format!("Failed to create Redis pool: {}", e))
        })?;

        let store = Self {
            pool,
            key_prefix: key_prefix.into(),
        };

        // Fail at startup rather than on the first publish.
        store.health_check().await?;
        info!("Redis peer ID store initialized (prefix '{}')", store.key_prefix);

        Ok(store)
    }

    pub async fn from_config(config: &AppConfig) -> Result<Self, SignalingError> {
        let redis_url = config
            .redis_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                SignalingError::NotConfigured("REDIS_URL is required for the redis peer store".to_string())
            })?;

        Self::new(redis_url, config.peer_id_key_prefix.clone()).await
    }

    pub fn key_for(&self, appointment_id: &str) -> String {
        format!("{}{}", self.key_prefix, appointment_id)
    }

    async fn connection(&self) -> Result<Connection, SignalingError> {
        self.pool.get().await.map_err(|e| {
            error!("Failed to get Redis connection: {}", e);
            SignalingError::Store(format!("Failed to get Redis connection: {}", e))
        })
    }
}

#[async_trait]
impl PeerIdStore for RedisPeerIdStore {
    async fn put(&self, appointment_id: &str, peer_id: &str) -> Result<(), SignalingError> {
        let mut conn = self.connection().await?;
        let _: () = conn.set(self.key_for(appointment_id), peer_id).await?;

        debug!("Stored peer ID for appointment {} in Redis", appointment_id);
        Ok(())
    }

    async fn get(&self, appointment_id: &str) -> Result<Option<String>, SignalingError> {
        let mut conn = self.connection().await?;
        let peer_id: Option<String> = conn.get(self.key_for(appointment_id)).await?;
        Ok(peer_id)
    }

    async fn health_check(&self) -> Result<(), SignalingError> {
        let mut conn = self.connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
