//! The future-API seam.
//!
//! Every operation that would eventually hit a real server goes through
//! [`ProfileBackend`], so the fixture "authentication" can be swapped for a
//! genuine credential-verification boundary without touching the session
//! store's operation contract (inputs, outputs, error kinds).
//!
//! The session store carries the backend as `Arc<dyn ProfileBackend>`.

use std::time::Duration;

use async_trait::async_trait;

use crate::errors::AuthError;
use crate::fixtures;
use crate::models::UserProfile;

/// Default simulated round-trip for the fixture backend.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait ProfileBackend: Send + Sync {
    /// Resolves credentials to a profile, or `InvalidCredentials`.
    async fn authenticate(&self, email: &str, password: &str) -> Result<UserProfile, AuthError>;

    /// Creates a fresh account, or `EmailInUse` when the email is taken.
    async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<UserProfile, AuthError>;

    /// Saves an edited profile, returning the stored version.
    async fn save_profile(&self, profile: UserProfile) -> Result<UserProfile, AuthError>;
}

// ────────────────────────────────────────────────────────────────────────────
// FixtureBackend — the only shipped implementation
// ────────────────────────────────────────────────────────────────────────────

/// In-memory fixture directory plus a simulated network delay.
///
/// Passwords are accepted unconditionally — a documented stand-in for real
/// verification, not a security control.
pub struct FixtureBackend {
    users: Vec<UserProfile>,
    latency: Duration,
}

impl FixtureBackend {
    /// Fixture directory with the default ~1s latency.
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_LATENCY)
    }

    /// Fixture directory with a custom latency. Tests pass zero.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            users: fixtures::demo_users(),
            latency,
        }
    }

    async fn simulate_round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for FixtureBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileBackend for FixtureBackend {
    async fn authenticate(
        &self,
        email: &str,
        _password: &str,
    ) -> Result<UserProfile, AuthError> {
        self.simulate_round_trip().await;
        self.users
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)
    }

    async fn register(
        &self,
        email: &str,
        _password: &str,
        full_name: &str,
    ) -> Result<UserProfile, AuthError> {
        self.simulate_round_trip().await;
        if self.users.iter().any(|u| u.email == email) {
            return Err(AuthError::EmailInUse);
        }
        // Ids continue the fixture numbering. The directory itself is never
        // extended, so uniqueness holds only within this session.
        let id = (self.users.len() + 1).to_string();
        Ok(UserProfile::new(id, email, full_name))
    }

    async fn save_profile(&self, profile: UserProfile) -> Result<UserProfile, AuthError> {
        self.simulate_round_trip().await;
        Ok(profile)
    }
}
