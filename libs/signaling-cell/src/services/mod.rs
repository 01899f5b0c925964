// libs/signaling-cell/src/services/mod.rs

pub mod redis_store;
pub mod relay;
pub mod store;

pub use redis_store::RedisPeerIdStore;
pub use relay::SignalingService;
pub use store::{InMemoryPeerIdStore, PeerIdStore};
