//! Concurrent session map
//!
//! DashMap keyed by session id, one entry per session. The map's entry API
//! gives compare-and-create on first touch (exactly one winner under a
//! racing first access); each entry carries its own parking_lot mutex, so
//! same-session mutations serialize on that mutex alone and sessions never
//! share a lock.
//!
//! ## Locking order
//!
//! Map shard guards are always dropped before an entry mutex is taken, and
//! the sweep never holds an entry mutex while touching the map. There is no
//! path that holds both in the opposite order.

use crate::retention::RetentionPolicy;
use crate::session::Session;
use chrono::Utc;
use dashmap::DashMap;
use lifesynth_core::{SessionAction, SessionId, SessionSnapshot, DEFAULT_GRID_SIZE};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;

/// One session's slot in the map.
///
/// `last_access_ms` drives the idle TTL; `last_access_seq` is a logical
/// clock that orders accesses even within one millisecond, so LRU eviction
/// never has to break wall-clock ties.
struct SessionEntry {
    state: Mutex<Session>,
    last_access_ms: AtomicI64,
    last_access_seq: AtomicU64,
}

impl SessionEntry {
    fn new(grid_size: usize) -> Self {
        Self {
            state: Mutex::new(Session::new(grid_size)),
            last_access_ms: AtomicI64::new(Utc::now().timestamp_millis()),
            last_access_seq: AtomicU64::new(0),
        }
    }

    fn touch(&self, seq: u64) {
        self.last_access_ms
            .store(Utc::now().timestamp_millis(), Ordering::Release);
        self.last_access_seq.store(seq, Ordering::Release);
    }

    /// Whether an apply currently holds this entry's lock.
    fn is_busy(&self) -> bool {
        self.state.try_lock().is_none()
    }
}

/// Concurrency-safe mapping from session identifier to session state.
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - `get_or_create()`: compare-and-create via the map's entry API
/// - `apply()`: serialized per session on that session's own mutex
/// - Different sessions never contend on a shared lock
///
/// # Example
///
/// ```
/// use lifesynth_core::{SessionAction, SessionId};
/// use lifesynth_store::SessionStore;
///
/// let store = SessionStore::new(16);
/// let id = SessionId::new("session_a");
///
/// let snapshot = store.apply(&id, &SessionAction::Step);
/// assert_eq!(snapshot.step_counter, 1);
/// ```
pub struct SessionStore {
    sessions: DashMap<SessionId, Arc<SessionEntry>>,
    grid_size: usize,
    retention: RetentionPolicy,
    /// Logical access clock. Monotonically increasing; each session touch
    /// takes the next tick.
    access_clock: AtomicU64,
}

impl SessionStore {
    /// Create a store with the given grid dimension and default retention.
    pub fn new(grid_size: usize) -> Self {
        Self::with_retention(grid_size, RetentionPolicy::default())
    }

    /// Create a store with an explicit retention policy.
    pub fn with_retention(grid_size: usize, retention: RetentionPolicy) -> Self {
        Self {
            sessions: DashMap::new(),
            grid_size,
            retention,
            access_clock: AtomicU64::new(0),
        }
    }

    /// Grid dimension used for every session this store creates.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// The retention policy in effect.
    pub fn retention(&self) -> &RetentionPolicy {
        &self.retention
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Check if no sessions exist.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Check if a session exists without creating it.
    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    // ========================================================================
    // Session Operations
    // ========================================================================

    /// Read a session's state, creating the session on first reference.
    ///
    /// An unseen identifier gets a fresh all-dead grid and counter 0.
    /// Concurrent first access from multiple callers creates exactly one
    /// entry; the losers observe the winner's session.
    pub fn get_or_create(&self, id: &SessionId) -> SessionSnapshot {
        let entry = self.entry(id);
        let session = entry.state.lock();
        session.snapshot()
    }

    /// Apply an action to a session, creating the session on first
    /// reference, and return the resulting state.
    ///
    /// The whole read-compute-write runs under the session's mutex, so
    /// concurrent calls against the same session are fully serialized and
    /// no update is lost. Calls against other sessions proceed in parallel.
    pub fn apply(&self, id: &SessionId, action: &SessionAction) -> SessionSnapshot {
        let entry = self.entry(id);
        let mut session = entry.state.lock();
        session.apply(action);
        tracing::debug!(session = %id, action = action.as_str(), "applied action");
        session.snapshot()
    }

    /// Drop a session outright.
    ///
    /// Returns `true` if the session existed.
    pub fn remove(&self, id: &SessionId) -> bool {
        self.sessions.remove(id).is_some()
    }

    // ========================================================================
    // Retention
    // ========================================================================

    /// Run a retention pass: drop idle-expired sessions, then evict
    /// least-recently-used sessions down to the capacity cap.
    ///
    /// Returns the number of sessions evicted. The same pass runs
    /// opportunistically whenever a new session is about to be created.
    pub fn sweep(&self) -> usize {
        let mut evicted = self.sweep_expired();
        while self.sessions.len() > self.retention.max_sessions {
            if !self.evict_lru() {
                break;
            }
            evicted += 1;
        }
        if evicted > 0 {
            tracing::info!(
                evicted,
                remaining = self.sessions.len(),
                "retention sweep complete"
            );
        }
        evicted
    }

    /// Fetch the entry for `id`, creating it if absent, and mark it
    /// recently used.
    fn entry(&self, id: &SessionId) -> Arc<SessionEntry> {
        if !self.sessions.contains_key(id) {
            // Make room before inserting, never after: an existing session
            // must not be evicted to favor one that already fit.
            self.reserve_capacity();
        }
        let entry = self
            .sessions
            .entry(id.clone())
            .or_insert_with(|| {
                tracing::debug!(session = %id, grid_size = self.grid_size, "created session");
                Arc::new(SessionEntry::new(self.grid_size))
            })
            .clone();
        let seq = self.access_clock.fetch_add(1, Ordering::AcqRel) + 1;
        entry.touch(seq);
        entry
    }

    /// Sweep expired sessions and evict LRU entries until a new session
    /// fits under the cap.
    fn reserve_capacity(&self) {
        self.sweep_expired();
        while self.sessions.len() >= self.retention.max_sessions {
            if !self.evict_lru() {
                break;
            }
        }
    }

    /// Drop every session idle past the TTL. Busy sessions are kept.
    fn sweep_expired(&self) -> usize {
        let Some(ttl) = self.retention.idle_ttl else {
            return 0;
        };
        let cutoff = Utc::now().timestamp_millis() - ttl.num_milliseconds();
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| {
            entry.last_access_ms.load(Ordering::Acquire) >= cutoff || entry.is_busy()
        });
        before.saturating_sub(self.sessions.len())
    }

    /// Evict the least recently used idle session.
    ///
    /// Returns `false` when nothing could be evicted (empty map, or every
    /// session has an apply in flight).
    fn evict_lru(&self) -> bool {
        let mut victim: Option<(SessionId, u64)> = None;
        for entry in self.sessions.iter() {
            if entry.value().is_busy() {
                continue;
            }
            let seq = entry.value().last_access_seq.load(Ordering::Acquire);
            if victim.as_ref().map_or(true, |(_, best)| seq < *best) {
                victim = Some((entry.key().clone(), seq));
            }
        }
        match victim {
            Some((id, _)) => {
                self.sessions.remove(&id);
                tracing::debug!(session = %id, "evicted least recently used session");
                true
            }
            None => false,
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}
