// libs/signaling-cell/src/lib.rs
//! # Signaling Cell
//!
//! Relays peer-to-peer connection ids between the two participants of a video
//! appointment. The patient's client publishes the id its media library handed
//! out; the doctor's client polls for it and places the call.
//!
//! ## Architecture
//!
//! ```text
//! +-----------------------------------------------------+
//! |                  Signaling Cell                     |
//! +-----------------------------------------------------+
//! |  handlers.rs    |  HTTP endpoint handlers           |
//! |  router.rs      |  Route definitions                |
//! |  models.rs      |  DTOs & error type                |
//! |  services/      |  Business logic layer             |
//! |    store.rs     |  PeerIdStore trait + memory store |
//! |    redis_store.rs| Redis-backed store               |
//! |    relay.rs     |  Publish / fetch validation       |
//! +-----------------------------------------------------+
//! ```
//!
//! ## API Endpoints
//!
//! - `POST /peer-id` - Publish `{appointmentId, peerId}`
//! - `GET /peer-id?appointmentId=...` - Fetch the latest published peer id
//! - `POST|GET /notifications/send-peer-id`, `GET /notifications/get-peer-id` - Aliases
//! - `GET /signaling/health` - Store reachability
//!
//! ## Usage Example
//!
//! ```rust
//! use signaling_cell::{signaling_routes, SignalingService};
//! use std::sync::Arc;
//!
//! let routes = signaling_routes(Arc::new(SignalingService::in_memory()));
//! ```

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    FetchPeerIdQuery, PeerIdResponse, PublishPeerIdRequest, PublishPeerIdResponse,
    SignalingError, SignalingHealthResponse, StoreHealth,
};

pub use services::{InMemoryPeerIdStore, PeerIdStore, RedisPeerIdStore, SignalingService};

pub use router::signaling_routes;
