//! Main entry point for Lifesynth.
//!
//! This module provides the `Lifesynth` struct, the process-owned handle
//! the request dispatcher calls into. There is no ambient global state:
//! whoever starts the process builds one `Lifesynth` and passes it (or an
//! `Arc` of it) to the serving layer.

use chrono::Duration;
use lifesynth_core::{Error, Result, SessionId, SessionSnapshot, DEFAULT_GRID_SIZE};
use lifesynth_store::{RetentionPolicy, SessionStore};
use lifesynth_wire::MutateRequest;
use std::sync::Arc;

/// Session identifier the `Global` scope maps every caller onto.
const GLOBAL_SESSION: &str = "global";

/// How caller-supplied session identifiers are interpreted.
///
/// Both behaviors exist in the wild; the choice is explicit configuration
/// rather than an accident of deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionScope {
    /// Each identifier addresses its own isolated session; a request
    /// without an identifier is rejected with
    /// [`Error::MissingSessionId`]. The default.
    PerSession,
    /// One implicit shared simulation; supplied identifiers are ignored.
    Global,
}

impl Default for SessionScope {
    fn default() -> Self {
        SessionScope::PerSession
    }
}

/// The Lifesynth simulation service.
///
/// Owns the session store and exposes the two logical operations the
/// dispatcher needs: [`Lifesynth::read_grid`] and [`Lifesynth::mutate`].
/// Cheap to share: wrap it in an `Arc` and clone the handle per worker.
///
/// # Example
///
/// ```ignore
/// use lifesynth::prelude::*;
/// use chrono::Duration;
///
/// let synth = Lifesynth::builder()
///     .grid_size(16)
///     .max_sessions(512)
///     .idle_ttl(Duration::minutes(30))
///     .build();
///
/// let snapshot = synth.read_grid(Some("session_a"))?;
/// assert_eq!(snapshot.grid.size(), 16);
/// ```
pub struct Lifesynth {
    store: Arc<SessionStore>,
    scope: SessionScope,
}

impl Lifesynth {
    /// Create a service with default settings: 16x16 grids, per-session
    /// scoping, default retention.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for service configuration.
    pub fn builder() -> LifesynthBuilder {
        LifesynthBuilder::new()
    }

    /// Read a session's grid and step counter, creating the session on
    /// first reference.
    ///
    /// This is the `ReadGrid` operation: the initial page load as well as
    /// any later refresh goes through here.
    pub fn read_grid(&self, session: Option<&str>) -> Result<SessionSnapshot> {
        let id = self.resolve_session(session)?;
        Ok(self.store.get_or_create(&id))
    }

    /// Apply a mutation request to a session and return the resulting
    /// state.
    ///
    /// The action is validated before any session state is touched, so a
    /// rejected request (unknown action, missing payload, missing session
    /// identifier) never creates or modifies a session.
    pub fn mutate(&self, session: Option<&str>, request: &MutateRequest) -> Result<SessionSnapshot> {
        let id = self.resolve_session(session)?;
        let action = request.action()?;
        Ok(self.store.apply(&id, &action))
    }

    /// The underlying session store, for retention sweeps and inspection.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// The scoping mode this service was built with.
    pub fn scope(&self) -> SessionScope {
        self.scope
    }

    /// Map the caller-supplied identifier through the configured scope.
    fn resolve_session(&self, session: Option<&str>) -> Result<SessionId> {
        match self.scope {
            SessionScope::PerSession => session
                .map(SessionId::from)
                .ok_or(Error::MissingSessionId),
            SessionScope::Global => Ok(SessionId::from(GLOBAL_SESSION)),
        }
    }
}

impl Default for Lifesynth {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for service configuration.
///
/// # Example
///
/// ```ignore
/// // A single shared simulation, the pre-session deployment shape
/// let synth = Lifesynth::builder()
///     .session_scope(SessionScope::Global)
///     .build();
/// ```
pub struct LifesynthBuilder {
    grid_size: usize,
    retention: RetentionPolicy,
    scope: SessionScope,
}

impl LifesynthBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            retention: RetentionPolicy::default(),
            scope: SessionScope::default(),
        }
    }

    /// Set the grid dimension for every session (default 16).
    pub fn grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    /// Cap the number of live sessions (default 1024, LRU eviction).
    pub fn max_sessions(mut self, max_sessions: usize) -> Self {
        self.retention = self.retention.with_max_sessions(max_sessions);
        self
    }

    /// Sweep sessions idle longer than `ttl` (off by default).
    pub fn idle_ttl(mut self, ttl: Duration) -> Self {
        self.retention = self.retention.with_idle_ttl(ttl);
        self
    }

    /// Set the session scoping mode (default [`SessionScope::PerSession`]).
    pub fn session_scope(mut self, scope: SessionScope) -> Self {
        self.scope = scope;
        self
    }

    /// Build the service.
    pub fn build(self) -> Lifesynth {
        Lifesynth {
            store: Arc::new(SessionStore::with_retention(self.grid_size, self.retention)),
            scope: self.scope,
        }
    }
}

impl Default for LifesynthBuilder {
    fn default() -> Self {
        Self::new()
    }
}
