use std::sync::Arc;
use uuid::Uuid;

use shared_config::{AppConfig, PeerStoreBackend};

pub struct TestConfig {
    pub backend: PeerStoreBackend,
    pub redis_url: Option<String>,
    pub key_prefix: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            backend: PeerStoreBackend::Memory,
            redis_url: None,
            key_prefix: "test_peer_id:".to_string(),
        }
    }
}

impl TestConfig {
    /// Redis-backed config pointed at `REDIS_TEST_URL`, isolated under a fresh key prefix.
    /// `None` when no test Redis is available.
    pub fn redis_from_env() -> Option<Self> {
        let redis_url = std::env::var("REDIS_TEST_URL").ok()?;
        Some(Self {
            backend: PeerStoreBackend::Redis,
            redis_url: Some(redis_url),
            key_prefix: format!("test_{}:", Uuid::new_v4().simple()),
        })
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            peer_store_backend: self.backend,
            redis_url: self.redis_url.clone(),
            peer_id_key_prefix: self.key_prefix.clone(),
            cors_allowed_origins: Vec::new(),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Fresh appointment id so tests sharing a store never collide.
pub fn unique_appointment_id() -> String {
    format!("appt-{}", Uuid::new_v4())
}

/// Fresh connection id shaped like the ones the media library hands out.
pub fn unique_peer_id() -> String {
    Uuid::new_v4().to_string()
}
