//! Session retention policy
//!
//! Sessions are created lazily and never explicitly closed by callers, so
//! the store needs an eviction rule to keep the map bounded. The policy is
//! deliberate configuration, not an emergent leak: a hard session-count cap
//! with least-recently-used eviction, plus an optional idle TTL.

use chrono::Duration;

/// Eviction configuration for a [`crate::SessionStore`].
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use lifesynth_store::RetentionPolicy;
///
/// let policy = RetentionPolicy::default()
///     .with_max_sessions(256)
///     .with_idle_ttl(Duration::minutes(30));
/// assert_eq!(policy.max_sessions, 256);
/// ```
#[derive(Debug, Clone)]
pub struct RetentionPolicy {
    /// Maximum number of live sessions. Creating a session beyond the cap
    /// evicts the least recently used session first.
    pub max_sessions: usize,
    /// Sessions idle longer than this are swept. `None` disables the TTL;
    /// the capacity cap still applies.
    pub idle_ttl: Option<Duration>,
}

/// Default session capacity.
pub(crate) const DEFAULT_MAX_SESSIONS: usize = 1024;

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            max_sessions: DEFAULT_MAX_SESSIONS,
            idle_ttl: None,
        }
    }
}

impl RetentionPolicy {
    /// Set the session capacity.
    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    /// Enable the idle TTL.
    pub fn with_idle_ttl(mut self, idle_ttl: Duration) -> Self {
        self.idle_ttl = Some(idle_ttl);
        self
    }
}
