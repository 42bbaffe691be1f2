//! Sessions
//!
//! Per-client key/value state, addressed by [`SessionId`]. The cart domain
//! stores its cart under a single attribute; nothing else is shared.

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;

use crate::uuids::TypedUuid;

pub mod errors;
mod memory;

pub use errors::SessionStoreError;
pub use memory::MemorySessionStore;

/// Session marker
#[derive(Debug)]
pub struct Session;

/// Session UUID
pub type SessionId = TypedUuid<Session>;

/// Storage for session attributes.
///
/// Implementations expire sessions after a period of inactivity.
#[automock]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read an attribute from a session.
    ///
    /// Returns `None` when the session does not exist, has expired, or does
    /// not hold the attribute.
    async fn get(
        &self,
        session: SessionId,
        attribute: &str,
    ) -> Result<Option<Value>, SessionStoreError>;

    /// Write an attribute, creating the session if needed.
    async fn put(
        &self,
        session: SessionId,
        attribute: &str,
        value: Value,
    ) -> Result<(), SessionStoreError>;

    /// Remove an attribute. Missing sessions and attributes are ignored.
    async fn remove(&self, session: SessionId, attribute: &str) -> Result<(), SessionStoreError>;

    /// Evict every idle session, returning how many were dropped.
    async fn purge_expired(&self) -> Result<usize, SessionStoreError>;
}
