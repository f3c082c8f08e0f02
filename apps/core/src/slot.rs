//! The durable slot: one named key holding one serialized profile.
//!
//! Stands in for server-side persistence. A single JSON file under the data
//! directory — parse-or-discard on read, overwritten on every successful
//! mutation, removed on logout. No locking: the slot is confined to one
//! cooperative thread of execution.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::models::UserProfile;

/// The fixed key the current profile is stored under.
const SLOT_KEY: &str = "user.json";

#[derive(Debug, Error)]
pub enum SlotError {
    #[error("slot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("slot serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed slot for the current user's profile.
#[derive(Debug, Clone)]
pub struct ProfileSlot {
    path: PathBuf,
}

impl ProfileSlot {
    /// A slot living under `dir`. The directory is created on first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SLOT_KEY),
        }
    }

    /// Where the serialized profile lives on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored profile, if any.
    ///
    /// Fail-soft: a missing file is `None`; malformed content is logged,
    /// cleared, and reported as `None`. Read failures are never fatal.
    pub fn load(&self) -> Option<UserProfile> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read profile slot {}: {e}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!(
                    "Discarding malformed profile slot {}: {e}",
                    self.path.display()
                );
                if let Err(e) = fs::remove_file(&self.path) {
                    warn!("Failed to clear malformed profile slot: {e}");
                }
                None
            }
        }
    }

    /// Overwrites the slot with `profile`. Writes go through a temp file and
    /// a rename so a crash mid-write never leaves a half-written record.
    pub fn store(&self, profile: &UserProfile) -> Result<(), SlotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(profile)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Removes the stored profile. An already-absent slot is fine.
    pub fn clear(&self) -> Result<(), SlotError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
