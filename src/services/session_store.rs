use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

use crate::models::quiz_attempt::QuizAttempt;

pub const DEFAULT_SESSION_TTL_SECS: i64 = 60 * 60;
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Key-value storage for the attempt each session is currently answering.
///
/// Only registered sessions can hold an attempt.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    fn register(&self, session_id: &str);
    fn is_active(&self, session_id: &str) -> bool;
    fn get(&self, session_id: &str) -> Option<QuizAttempt>;
    fn set(&self, session_id: &str, attempt: QuizAttempt);
}

#[derive(Debug)]
struct SessionEntry {
    attempt: Option<QuizAttempt>,
    last_seen: DateTime<Utc>,
    seq: u64,
}

#[derive(Debug, Default)]
struct Sessions {
    entries: HashMap<String, SessionEntry>,
    next_seq: u64,
}

impl Sessions {
    fn touch(&mut self, session_id: &str, now: DateTime<Utc>) -> Option<&mut SessionEntry> {
        let seq = self.next_seq;
        let entry = self.entries.get_mut(session_id)?;
        entry.last_seen = now;
        entry.seq = seq;
        self.next_seq += 1;
        Some(entry)
    }

    fn evict_idle_before(&mut self, cutoff: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| e.last_seen > cutoff);
        before - self.entries.len()
    }

    fn evict_least_recent(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, e)| e.seq)
            .map(|(id, _)| id.clone());
        if let Some(id) = oldest {
            self.entries.remove(&id);
            tracing::info!(session_id = %id, "Session evicted to stay under capacity");
        }
    }
}

/// Process-local sessions that expire after `ttl` without activity and are
/// capped at `max_sessions`, dropping the least recently used first.
#[derive(Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<Mutex<Sessions>>,
    ttl: Duration,
    max_sessions: usize,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_limits(
            Duration::seconds(DEFAULT_SESSION_TTL_SECS),
            DEFAULT_MAX_SESSIONS,
        )
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(Sessions::default())),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Drops every session idle since before `cutoff`; returns how many.
    pub fn evict_idle_before(&self, cutoff: DateTime<Utc>) -> usize {
        let mut guard = self.sessions.lock().expect("session store mutex poisoned");
        guard.evict_idle_before(cutoff)
    }

    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .expect("session store mutex poisoned")
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock_fresh(&self) -> std::sync::MutexGuard<'_, Sessions> {
        let mut guard = self.sessions.lock().expect("session store mutex poisoned");
        let evicted = guard.evict_idle_before(Utc::now() - self.ttl);
        if evicted > 0 {
            tracing::info!(evicted, "Expired sessions evicted");
        }
        guard
    }
}

impl SessionStore for InMemorySessionStore {
    fn register(&self, session_id: &str) {
        let mut guard = self.lock_fresh();
        if !guard.entries.contains_key(session_id) && guard.entries.len() >= self.max_sessions {
            guard.evict_least_recent();
        }
        let seq = guard.next_seq;
        guard.next_seq += 1;
        guard.entries.insert(
            session_id.to_string(),
            SessionEntry {
                attempt: None,
                last_seen: Utc::now(),
                seq,
            },
        );
    }

    fn is_active(&self, session_id: &str) -> bool {
        self.lock_fresh().entries.contains_key(session_id)
    }

    fn get(&self, session_id: &str) -> Option<QuizAttempt> {
        let mut guard = self.lock_fresh();
        guard
            .touch(session_id, Utc::now())
            .and_then(|e| e.attempt.clone())
    }

    fn set(&self, session_id: &str, attempt: QuizAttempt) {
        let mut guard = self.lock_fresh();
        match guard.touch(session_id, Utc::now()) {
            Some(entry) => entry.attempt = Some(attempt),
            None => tracing::warn!(session_id = %session_id, "Attempt for unknown session dropped"),
        }
    }
}
