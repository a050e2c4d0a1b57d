use crate::error::{GuideError, Result};
use crate::session::{Session, SessionSnapshot};
use std::collections::HashMap;
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// SessionStore
// ---------------------------------------------------------------------------

/// Owns every session for the process lifetime. All access goes through one
/// lock so a read-modify-write on a session can never interleave with
/// another; different callers are serialized, matching the one-request-at-a-
/// time contract of the transports.
///
/// Sessions are never evicted. Identifiers are `session_N` with a strictly
/// increasing 1-based counter that is never reused.
pub struct SessionStore {
    inner: Mutex<Inner>,
}

struct Inner {
    sessions: HashMap<String, Session>,
    next_id: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                sessions: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock still holds the only copy of the table; keep going.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Allocates the next identifier and stores a fresh session. Returns a
    /// copy of the stored session. Never fails; empty questions are accepted.
    pub fn create(&self, question: impl Into<String>) -> Session {
        let mut inner = self.lock();
        let id = format!("session_{}", inner.next_id);
        inner.next_id += 1;
        let session = Session::new(id.clone(), question);
        inner.sessions.insert(id, session.clone());
        session
    }

    /// Runs `f` on the session under the store lock. Every mutating
    /// operation resolves its session through here, so `SessionNotFound`
    /// surfaces uniformly.
    pub fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Session) -> Result<T>,
    ) -> Result<T> {
        let mut inner = self.lock();
        let session = inner
            .sessions
            .get_mut(id)
            .ok_or_else(|| GuideError::SessionNotFound(id.to_string()))?;
        f(session)
    }

    pub fn get(&self, id: &str) -> Result<Session> {
        let inner = self.lock();
        inner
            .sessions
            .get(id)
            .cloned()
            .ok_or_else(|| GuideError::SessionNotFound(id.to_string()))
    }

    pub fn snapshot(&self, id: &str) -> Result<SessionSnapshot> {
        Ok(self.get(id)?.snapshot())
    }

    pub fn len(&self) -> usize {
        self.lock().sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
