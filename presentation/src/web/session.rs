//! Per-browser session state
//!
//! Each browser gets a random session id in a cookie; the id keys its
//! keyword list. An entry is created on the first accepted keyword, so
//! cookie-less clients never allocate one, and entries idle for longer
//! than the store's idle timeout are evicted. State lives in memory and is
//! lost on restart.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use blogsmith_domain::SessionKeywordList;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "blogsmith_session";

/// Default time a session may sit untouched before it is evicted.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Opaque session identifier.
pub type SessionId = Uuid;

#[derive(Debug)]
struct SessionEntry {
    keywords: SessionKeywordList,
    last_seen: Instant,
}

/// In-memory keyword lists keyed by session id.
#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<HashMap<SessionId, SessionEntry>>,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, SessionEntry>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Id to answer this request with.
    ///
    /// Keeps the cookie's id (marking its session as seen) or mints a fresh
    /// one. Nothing is stored until a keyword is added.
    pub fn resolve(&self, id: Option<SessionId>) -> SessionId {
        match id {
            Some(id) => {
                if let Some(entry) = self.lock().get_mut(&id) {
                    entry.last_seen = Instant::now();
                }
                id
            }
            None => Uuid::new_v4(),
        }
    }

    /// Snapshot of the session's keywords; empty for unknown ids.
    pub fn keywords(&self, id: SessionId) -> SessionKeywordList {
        self.lock()
            .get(&id)
            .map(|entry| entry.keywords.clone())
            .unwrap_or_default()
    }

    /// Append `keyword` to the session's list, creating the session on the
    /// first accepted keyword. Idle sessions are evicted on the way.
    ///
    /// Returns `false` (and stores nothing) for blank input.
    pub fn add_keyword(&self, id: SessionId, keyword: &str) -> bool {
        if keyword.trim().is_empty() {
            return false;
        }

        let now = Instant::now();
        let mut sessions = self.lock();
        Self::evict_idle(&mut sessions, now, self.idle_timeout);

        let entry = sessions.entry(id).or_insert_with(|| {
            tracing::debug!(session = %id, "Opened new session");
            SessionEntry {
                keywords: SessionKeywordList::new(),
                last_seen: now,
            }
        });
        entry.last_seen = now;
        entry.keywords.add_keyword(keyword)
    }

    /// Drop every session idle for longer than the timeout as of `now`.
    /// Returns how many were removed.
    pub fn evict_idle_at(&self, now: Instant) -> usize {
        Self::evict_idle(&mut self.lock(), now, self.idle_timeout)
    }

    fn evict_idle(
        sessions: &mut HashMap<SessionId, SessionEntry>,
        now: Instant,
        idle_timeout: Duration,
    ) -> usize {
        let before = sessions.len();
        sessions.retain(|_, entry| now.saturating_duration_since(entry.last_seen) <= idle_timeout);
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, "Evicted idle sessions");
        }
        evicted
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read the session id from the request's `Cookie` headers.
pub fn session_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value binding the browser to `id`.
pub fn session_cookie(id: SessionId) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}
