//! In-memory session store

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use rustc_hash::FxHashMap;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::sessions::{SessionId, SessionStore, SessionStoreError};

#[derive(Debug)]
struct SessionEntry {
    attributes: FxHashMap<String, Value>,
    last_accessed: Timestamp,
}

impl SessionEntry {
    fn new(now: Timestamp) -> Self {
        Self {
            attributes: FxHashMap::default(),
            last_accessed: now,
        }
    }

    fn is_idle(&self, now: Timestamp, ttl: SignedDuration) -> bool {
        now.duration_since(self.last_accessed) >= ttl
    }
}

/// Session store backed by a process-local map.
///
/// A session that has not been touched for `ttl` reads as absent and is
/// evicted on the next access or sweep.
#[derive(Debug, Clone)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<FxHashMap<SessionId, SessionEntry>>>,
    ttl: SignedDuration,
}

impl MemorySessionStore {
    /// An empty store whose sessions expire after `ttl` idle.
    #[must_use]
    pub fn new(ttl: SignedDuration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(FxHashMap::default())),
            ttl,
        }
    }

    /// Number of live (possibly idle) sessions held.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether the store holds no sessions at all.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(
        &self,
        session: SessionId,
        attribute: &str,
    ) -> Result<Option<Value>, SessionStoreError> {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;

        let Some(entry) = sessions.get_mut(&session) else {
            return Ok(None);
        };

        if entry.is_idle(now, self.ttl) {
            sessions.remove(&session);

            debug!(%session, "session expired on access");

            return Ok(None);
        }

        entry.last_accessed = now;

        Ok(entry.attributes.get(attribute).cloned())
    }

    async fn put(
        &self,
        session: SessionId,
        attribute: &str,
        value: Value,
    ) -> Result<(), SessionStoreError> {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;

        let entry = sessions
            .entry(session)
            .or_insert_with(|| SessionEntry::new(now));

        if entry.is_idle(now, self.ttl) {
            entry.attributes.clear();
        }

        entry.last_accessed = now;
        entry.attributes.insert(attribute.to_owned(), value);

        Ok(())
    }

    async fn remove(&self, session: SessionId, attribute: &str) -> Result<(), SessionStoreError> {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;

        if let Some(entry) = sessions.get_mut(&session) {
            entry.attributes.remove(attribute);
            entry.last_accessed = now;
        }

        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize, SessionStoreError> {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, entry| !entry.is_idle(now, self.ttl));

        Ok(before - sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    const ATTRIBUTE: &str = "shop.cart";

    fn store() -> MemorySessionStore {
        MemorySessionStore::new(SignedDuration::from_mins(30))
    }

    #[tokio::test]
    async fn get_unknown_session_returns_none() -> TestResult {
        let result = store().get(SessionId::new(), ATTRIBUTE).await?;

        assert!(result.is_none(), "expected no attribute, got {result:?}");

        Ok(())
    }

    #[tokio::test]
    async fn put_then_get_returns_value() -> TestResult {
        let store = store();
        let session = SessionId::new();

        store.put(session, ATTRIBUTE, json!({ "items": [] })).await?;

        let value = store.get(session, ATTRIBUTE).await?;

        assert_eq!(value, Some(json!({ "items": [] })));

        Ok(())
    }

    #[tokio::test]
    async fn sessions_are_isolated() -> TestResult {
        let store = store();
        let session = SessionId::new();

        store.put(session, ATTRIBUTE, json!(1)).await?;

        let other = store.get(SessionId::new(), ATTRIBUTE).await?;

        assert!(other.is_none(), "expected other session to be empty");

        Ok(())
    }

    #[tokio::test]
    async fn remove_drops_attribute_but_keeps_session() -> TestResult {
        let store = store();
        let session = SessionId::new();

        store.put(session, ATTRIBUTE, json!(1)).await?;
        store.remove(session, ATTRIBUTE).await?;

        assert!(store.get(session, ATTRIBUTE).await?.is_none());
        assert_eq!(store.len().await, 1);

        Ok(())
    }

    #[tokio::test]
    async fn remove_unknown_session_is_noop() -> TestResult {
        let store = store();

        store.remove(SessionId::new(), ATTRIBUTE).await?;

        assert!(store.is_empty().await);

        Ok(())
    }

    #[tokio::test]
    async fn idle_session_reads_as_absent_and_is_evicted() -> TestResult {
        let store = MemorySessionStore::new(SignedDuration::ZERO);
        let session = SessionId::new();

        store.put(session, ATTRIBUTE, json!(1)).await?;

        assert!(store.get(session, ATTRIBUTE).await?.is_none());
        assert!(store.is_empty().await);

        Ok(())
    }

    #[tokio::test]
    async fn purge_expired_counts_evictions() -> TestResult {
        let store = MemorySessionStore::new(SignedDuration::ZERO);

        store.put(SessionId::new(), ATTRIBUTE, json!(1)).await?;
        store.put(SessionId::new(), ATTRIBUTE, json!(2)).await?;

        assert_eq!(store.purge_expired().await?, 2);
        assert!(store.is_empty().await);

        Ok(())
    }

    #[tokio::test]
    async fn purge_expired_keeps_active_sessions() -> TestResult {
        let store = store();

        store.put(SessionId::new(), ATTRIBUTE, json!(1)).await?;

        assert_eq!(store.purge_expired().await?, 0);
        assert_eq!(store.len().await, 1);

        Ok(())
    }
}
