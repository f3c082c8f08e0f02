//! Session and profile state for a local-first résumé editor.
//!
//! The crate ships the session store ([`session`]), its data model
//! ([`models`]), the durable slot the session mirrors into ([`slot`]), the
//! fixture-backed authentication seam ([`backend`]), and plain-text résumé
//! rendering ([`render`]). The demo binary wires them together the way an
//! embedding application would.

pub mod backend;
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod models;
pub mod render;
pub mod session;
pub mod slot;

pub use backend::{FixtureBackend, ProfileBackend, DEFAULT_LATENCY};
pub use errors::AuthError;
pub use models::{
    parse_skills, EducationEntry, ExperienceEntry, ProfileUpdate, SocialLinks, UserProfile,
};
pub use render::{date_range, format_month, initials, resume_text};
pub use session::{SessionPhase, SessionState, SessionStore};
pub use slot::{ProfileSlot, SlotError};
