//! store
//!
//! Snapshot persistence collaborator.
//!
//! # Architecture
//!
//! The engine itself never persists anything; durable storage of one
//! snapshot per (practice, user) pairing belongs to a collaborator
//! behind the [`SnapshotStore`] trait. Writes use optimistic
//! concurrency: every stored snapshot carries a monotonically
//! increasing version counter, a write supplying a stale version is
//! rejected with [`StoreError::VersionConflict`], and an accepted write
//! increments the version by one. Conflicts are reported to the caller,
//! never silently resolved.

pub mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::core::snapshot::RepositorySnapshot;

/// Errors from snapshot storage operations.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// No snapshot stored for the given practice/user pairing.
    #[error("no snapshot stored for practice '{practice_id}' and user '{user_id}'")]
    NotFound {
        practice_id: String,
        user_id: String,
    },

    /// The write carried a version older than the stored one.
    #[error("version conflict: client version {supplied} is older than stored version {stored}")]
    VersionConflict { supplied: u64, stored: u64 },
}

/// A stored snapshot with its version stamp.
///
/// The version is the token for the next write: pass it back as
/// `client_version` to [`SnapshotStore::upsert`] and the write fails
/// with a conflict if someone else advanced the entry in between.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSnapshot {
    /// The snapshot, or `None` when the learner's repository is in the
    /// uninitialized state.
    pub state: Option<RepositorySnapshot>,
    /// Monotonically increasing write counter, starting at 1.
    pub version: u64,
}

/// Versioned snapshot storage keyed by (practice, user).
pub trait SnapshotStore {
    /// Read the stored snapshot, if any.
    fn get(&self, practice_id: &str, user_id: &str) -> Option<StoredSnapshot>;

    /// Create or update the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::VersionConflict`] if `client_version` is
    /// older than the stored version. Passing `None` skips the check
    /// (last write wins).
    fn upsert(
        &self,
        practice_id: &str,
        user_id: &str,
        state: Option<RepositorySnapshot>,
        client_version: Option<u64>,
    ) -> Result<StoredSnapshot, StoreError>;

    /// Delete the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if nothing is stored for the
    /// pairing.
    fn remove(&self, practice_id: &str, user_id: &str) -> Result<(), StoreError>;
}
