//! Session Store — the single source of truth for "who is logged in".
//!
//! Consumers hold a cheap-to-clone [`SessionStore`] handle, read
//! [`SessionState`] snapshots, and drive every change through the operations
//! below. Outcomes are never returned to the caller: success publishes a
//! profile, failure publishes an error message, never both.
//!
//! Overlapping operations follow last-write-wins, hardened by a monotonic
//! request sequence: a resolution arriving after a later-issued request has
//! already resolved is discarded. Synchronous `logout` takes a sequence
//! number too, so a slow in-flight call can never resurrect a closed
//! session. `loading` is true while any request is unresolved.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::backend::ProfileBackend;
use crate::errors::AuthError;
use crate::models::{ProfileUpdate, UserProfile};
use crate::slot::ProfileSlot;

// ────────────────────────────────────────────────────────────────────────────
// Published state
// ────────────────────────────────────────────────────────────────────────────

/// Where the session sits in its lifecycle. There is no terminal phase;
/// Authenticated and Anonymous alternate freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Authenticated,
}

/// One immutable snapshot of the published session state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub current_user: Option<UserProfile>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        if self.current_user.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Store
// ────────────────────────────────────────────────────────────────────────────

/// Mutable interior. `issued`/`resolved` carry the request sequence;
/// `in_flight` keeps `loading` accurate when a stale resolution is dropped.
#[derive(Default)]
struct Cell {
    state: SessionState,
    issued: u64,
    resolved: u64,
    in_flight: u64,
}

struct Inner {
    slot: ProfileSlot,
    backend: Arc<dyn ProfileBackend>,
    cell: RwLock<Cell>,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// Opens the store: reads the slot once and settles into Anonymous or
    /// Authenticated before returning.
    pub fn open(slot: ProfileSlot, backend: Arc<dyn ProfileBackend>) -> Self {
        let restored = slot.load();
        match &restored {
            Some(user) => info!("Restored session for {}", user.email),
            None => debug!("No stored session found"),
        }
        let state = SessionState {
            current_user: restored,
            loading: false,
            error: None,
        };
        Self {
            inner: Arc::new(Inner {
                slot,
                backend,
                cell: RwLock::new(Cell {
                    state,
                    ..Cell::default()
                }),
            }),
        }
    }

    /// The full published snapshot.
    pub fn state(&self) -> SessionState {
        self.inner.cell.read().state.clone()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.inner.cell.read().state.current_user.clone()
    }

    pub fn loading(&self) -> bool {
        self.inner.cell.read().state.loading
    }

    pub fn error(&self) -> Option<String> {
        self.inner.cell.read().state.error.clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.inner.cell.read().state.phase()
    }

    // ── Operations ──────────────────────────────────────────────────────────

    /// Signs in against the backend. The outcome is published, not returned.
    pub async fn login(&self, email: &str, password: &str) {
        let (seq, _) = self.begin("login");
        let outcome = self.inner.backend.authenticate(email, password).await;
        self.finish("login", seq, outcome);
    }

    /// Creates an account and signs it in.
    pub async fn register(&self, email: &str, password: &str, full_name: &str) {
        let (seq, _) = self.begin("register");
        let outcome = self
            .inner
            .backend
            .register(email, password, full_name)
            .await;
        self.finish("register", seq, outcome);
    }

    /// Shallow-merges `update` into the profile current at call time and
    /// saves the result. Publishes `NotLoggedIn` when no session is active;
    /// that path never touches the slot.
    pub async fn update_profile(&self, update: ProfileUpdate) {
        let (seq, current) = self.begin("update_profile");
        let outcome = match current {
            Some(profile) => {
                self.inner
                    .backend
                    .save_profile(update.apply_to(&profile))
                    .await
            }
            None => Err(AuthError::NotLoggedIn),
        };
        self.finish("update_profile", seq, outcome);
    }

    /// Ends the session immediately: no latency, no backend call. Slot
    /// removal failures are logged and swallowed.
    pub fn logout(&self) {
        let mut cell = self.inner.cell.write();
        cell.issued += 1;
        cell.resolved = cell.issued;
        if let Err(e) = self.inner.slot.clear() {
            warn!("Stored session not removed: {e}");
        }
        cell.state.current_user = None;
        info!("Logged out");
    }

    /// Dismisses the published error without touching anything else.
    pub fn clear_error(&self) {
        self.inner.cell.write().state.error = None;
    }

    // ── Internals ───────────────────────────────────────────────────────────

    /// Issues the next request number and flips the snapshot into its loading
    /// shape. Also returns the profile current at issue time, which
    /// `update_profile` merges against.
    fn begin(&self, op: &'static str) -> (u64, Option<UserProfile>) {
        let mut cell = self.inner.cell.write();
        cell.issued += 1;
        cell.in_flight += 1;
        cell.state.loading = true;
        cell.state.error = None;
        debug!("{op} issued as request {}", cell.issued);
        (cell.issued, cell.state.current_user.clone())
    }

    /// Applies a resolution, unless a later-issued request already resolved.
    /// The slot is mirrored under the lock, so a stale resolution can never
    /// touch the slot either.
    fn finish(&self, op: &'static str, seq: u64, outcome: Result<UserProfile, AuthError>) {
        let mut cell = self.inner.cell.write();
        cell.in_flight -= 1;
        if seq <= cell.resolved {
            warn!(
                "Discarding stale {op} resolution (request {seq}, newest {})",
                cell.resolved
            );
            cell.state.loading = cell.in_flight > 0;
            return;
        }
        cell.resolved = seq;
        match outcome {
            Ok(profile) => match self.inner.slot.store(&profile) {
                Ok(()) => {
                    info!("{op} resolved for {}", profile.email);
                    cell.state.current_user = Some(profile);
                }
                Err(e) => {
                    warn!("{op} could not mirror the profile: {e}");
                    cell.state.error = Some(AuthError::Unexpected(e.into()).to_string());
                }
            },
            Err(e) => {
                info!("{op} rejected: {e}");
                cell.state.error = Some(e.to_string());
            }
        }
        cell.state.loading = cell.in_flight > 0;
    }
}
