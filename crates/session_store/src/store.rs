//! Session registry keyed by chat/session id

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::structs::ReportSession;

/// In-memory registry of active sessions (session id -> session).
///
/// Sessions are created on first access and live until `remove` or
/// process exit. Each session hands out its own lock so one session's
/// events serialize against each other without blocking other users.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Arc<RwLock<ReportSession>>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the session for an id.
    pub async fn session(&self, session_id: &str) -> Arc<RwLock<ReportSession>> {
        {
            let sessions = self.sessions.read().await;
            if let Some(session) = sessions.get(session_id) {
                return Arc::clone(session);
            }
        }

        let mut sessions = self.sessions.write().await;
        // Re-check: another task may have created it between the locks
        Arc::clone(
            sessions
                .entry(session_id.to_string())
                .or_insert_with(|| {
                    tracing::debug!(session_id, "creating session");
                    Arc::new(RwLock::new(ReportSession::new()))
                }),
        )
    }

    /// Reset a session back to idle, dropping all entered data.
    pub async fn reset(&self, session_id: &str) {
        let session = self.session(session_id).await;
        session.write().await.reset();
    }

    /// Remove a session entirely. Returns whether one existed.
    pub async fn remove(&self, session_id: &str) -> bool {
        self.sessions.write().await.remove(session_id).is_some()
    }

    /// Number of active sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
