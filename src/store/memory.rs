//! store::memory
//!
//! In-memory snapshot store.
//!
//! # Design
//!
//! A mutex-guarded map keyed by (practice, user). Suitable for tests,
//! the practice REPL, and single-process deployments; a database-backed
//! implementation would keep the same trait contract.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::core::snapshot::RepositorySnapshot;

use super::{SnapshotStore, StoreError, StoredSnapshot};

/// In-memory [`SnapshotStore`] implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<(String, String), StoredSnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, practice_id: &str, user_id: &str) -> Option<StoredSnapshot> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&(practice_id.to_string(), user_id.to_string()))
            .cloned()
    }

    fn upsert(
        &self,
        practice_id: &str,
        user_id: &str,
        state: Option<RepositorySnapshot>,
        client_version: Option<u64>,
    ) -> Result<StoredSnapshot, StoreError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let key = (practice_id.to_string(), user_id.to_string());

        let version = match entries.get(&key) {
            Some(existing) => {
                if let Some(supplied) = client_version {
                    if supplied < existing.version {
                        return Err(StoreError::VersionConflict {
                            supplied,
                            stored: existing.version,
                        });
                    }
                }
                existing.version + 1
            }
            None => 1,
        };

        let stored = StoredSnapshot { state, version };
        entries.insert(key, stored.clone());
        Ok(stored)
    }

    fn remove(&self, practice_id: &str, user_id: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let key = (practice_id.to_string(), user_id.to_string());
        if entries.remove(&key).is_none() {
            return Err(StoreError::NotFound {
                practice_id: practice_id.to_string(),
                user_id: user_id.to_string(),
            });
        }
        Ok(())
    }
}
