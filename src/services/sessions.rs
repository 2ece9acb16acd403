use crate::core::SessionState;
use crate::services::chat::ChatBook;
use moka::future::{Cache, CacheBuilder};
use moka::notification::RemovalCause;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Errors that can occur with session operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(Uuid),
}

/// One viewer's state and open chats
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    state: RwLock<SessionState>,
    pub chats: ChatBook,
}

impl Session {
    fn new(id: Uuid, state: SessionState) -> Self {
        Self {
            id,
            state: RwLock::new(state),
            chats: ChatBook::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Copy of the current state
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Apply a transition and store the resulting state
    pub async fn update<F>(&self, transition: F) -> SessionState
    where
        F: FnOnce(SessionState) -> SessionState,
    {
        let mut guard = self.state.write().await;
        let next = transition(guard.clone());
        *guard = next.clone();
        next
    }
}

/// In-memory session store
///
/// Sessions expire after `idle_ttl` without access; expiry or removal
/// closes the session's chats.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Cache<Uuid, Arc<Session>>,
}

impl SessionStore {
    pub fn new(max_sessions: u64, idle_ttl: Duration) -> Self {
        let sessions = CacheBuilder::new(max_sessions)
            .time_to_idle(idle_ttl)
            .eviction_listener(|id: Arc<Uuid>, session: Arc<Session>, cause: RemovalCause| {
                tracing::debug!("Session {} removed ({:?})", id, cause);
                session.chats.close_all();
            })
            .build();

        Self { sessions }
    }

    /// Create and register a new session
    pub async fn create(&self, state: SessionState) -> Arc<Session> {
        let id = Uuid::new_v4();
        let session = Arc::new(Session::new(id, state));
        self.sessions.insert(id, Arc::clone(&session)).await;
        tracing::info!("Created session {}", id);
        session
    }

    pub async fn get(&self, id: Uuid) -> Result<Arc<Session>, SessionError> {
        self.sessions.get(&id).await.ok_or(SessionError::NotFound(id))
    }

    /// Remove a session, closing its chats
    pub async fn remove(&self, id: Uuid) -> Result<(), SessionError> {
        let session = self
            .sessions
            .remove(&id)
            .await
            .ok_or(SessionError::NotFound(id))?;
        session.chats.close_all();
        tracing::info!("Removed session {}", id);
        Ok(())
    }

    /// Approximate number of live sessions
    pub fn count(&self) -> u64 {
        self.sessions.entry_count()
    }
}
