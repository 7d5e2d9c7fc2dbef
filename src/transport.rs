//! Transport collaborator contract
//!
//! Connections are owned by the transport layer; the session core only routes
//! outbound messages by session id. A failed send is reported back as an
//! error and converted by the session into an implicit leave, never a crash.

use uuid::Uuid;

use crate::protocol::ServerMsg;

/// Delivery errors surfaced by the transport layer
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("session {0} is not connected")]
    NotConnected(Uuid),

    #[error("send to session {0} failed: {1}")]
    SendFailed(Uuid, String),
}

/// Outbound message delivery, keyed by session id
pub trait Transport: Send + Sync {
    fn send(&self, session_id: Uuid, msg: &ServerMsg) -> Result<(), TransportError>;
}
