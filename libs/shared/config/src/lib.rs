use std::env;
use std::fmt;
use tracing::warn;

const DEFAULT_PORT: u16 = 3000;

/// Which implementation backs the peer-id store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerStoreBackend {
    Memory,
    Redis,
}

impl PeerStoreBackend {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => Some(Self::Memory),
            "redis" => Some(Self::Redis),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Redis => "redis",
        }
    }
}

impl fmt::Display for PeerStoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub peer_store_backend: PeerStoreBackend,
    pub redis_url: Option<String>,
    pub peer_id_key_prefix: String,
    /// Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            peer_store_backend: PeerStoreBackend::Memory,
            redis_url: None,
            peer_id_key_prefix: "peer_id:".to_string(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            host: env::var("HOST")
                .unwrap_or_else(|_| {
                    warn!("HOST not set, using {}", defaults.host);
                    defaults.host.clone()
                }),
            port: match env::var("PORT") {
                Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                    warn!("PORT '{}' is not a valid port, using {}", raw, DEFAULT_PORT);
                    DEFAULT_PORT
                }),
                Err(_) => {
                    warn!("PORT not set, using {}", DEFAULT_PORT);
                    DEFAULT_PORT
                }
            },
            peer_store_backend: match env::var("PEER_STORE_BACKEND") {
                Ok(raw) => PeerStoreBackend::parse(&raw).unwrap_or_else(|| {
                    warn!("Unknown PEER_STORE_BACKEND '{}', using memory", raw);
                    PeerStoreBackend::Memory
                }),
                Err(_) => {
                    warn!("PEER_STORE_BACKEND not set, using memory");
                    PeerStoreBackend::Memory
                }
            },
            redis_url: env::var("REDIS_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            peer_id_key_prefix: env::var("PEER_ID_KEY_PREFIX")
                .unwrap_or_else(|_| defaults.peer_id_key_prefix.clone()),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
        };

        if config.peer_store_backend == PeerStoreBackend::Redis && !config.is_redis_configured() {
            warn!("PEER_STORE_BACKEND is redis but REDIS_URL is not set");
        }

        config
    }

    pub fn is_redis_configured(&self) -> bool {
        self.redis_url
            .as_deref()
            .map(|url| !url.is_empty())
            .unwrap_or(false)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Comma-separated origins; a lone `*` means any origin.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.iter().any(|origin| origin == "*") {
        Vec::new()
    } else {
        origins
    }
}
