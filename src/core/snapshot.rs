//! core::snapshot
//!
//! The in-memory repository snapshot and its JSON wire contract.
//!
//! # Architecture
//!
//! A snapshot is the complete state of one simulated repository: an
//! append-only commit list (insertion order = creation order), a branch
//! table, a tag table, and HEAD. Absence of a repository is represented
//! as `Option<RepositorySnapshot>` = `None` at the engine boundary.
//!
//! # Wire contract
//!
//! Field names and the HEAD tagged-union shape are part of the wire
//! contract and round-trip through JSON without loss:
//!
//! ```json
//! {
//!   "commits": [{"id": "...", "parents": [], "author": {...},
//!                "committer": {...}, "message": "first", "branch": "main"}],
//!   "branches": [{"name": "main", "commitId": ""}],
//!   "tags": [],
//!   "head": {"type": "branch", "ref": "main", "commitId": ""}
//! }
//! ```
//!
//! An unborn branch carries the empty string as its `commitId`; in Rust
//! that is `Option<CommitId>` = `None`.
//!
//! # Invariants
//!
//! - Every non-empty branch pointer and HEAD commit reference names a
//!   commit present in `commits`
//! - Commit parents name already-created commits only
//! - A branch-type HEAD references an existing branch
//! - Branch names and commit ids are unique
//!
//! Checked by [`crate::core::verify`].

use serde::{Deserialize, Serialize};

use super::types::{BranchName, CommitId, Signature};

/// A single simulated commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub id: CommitId,
    /// Parent commit ids; empty only for the first commit on a lineage.
    pub parents: Vec<CommitId>,
    pub author: Signature,
    pub committer: Signature,
    pub message: String,
    /// Branch the commit was created on. Display only, never used for
    /// graph traversal.
    pub branch: BranchName,
}

/// A branch pointer. `commit_id` of `None` is the unborn state: the
/// branch exists but has no commits yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub name: BranchName,
    #[serde(rename = "commitId", with = "id_or_empty")]
    pub commit_id: Option<CommitId>,
}

/// A tag pointer. Present in the model for wire compatibility; no
/// transition currently populates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(rename = "commitId")]
    pub commit_id: CommitId,
}

/// The HEAD reference: attached to a branch, or detached onto a commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Head {
    Branch {
        #[serde(rename = "ref")]
        ref_name: BranchName,
        #[serde(rename = "commitId", with = "id_or_empty")]
        commit_id: Option<CommitId>,
    },
    Detached {
        #[serde(rename = "commitId")]
        commit_id: CommitId,
    },
}

impl Head {
    /// Whether HEAD references a commit directly rather than a branch.
    pub fn is_detached(&self) -> bool {
        matches!(self, Head::Detached { .. })
    }

    /// The commit HEAD currently resolves to, if any.
    pub fn commit_id(&self) -> Option<&CommitId> {
        match self {
            Head::Branch { commit_id, .. } => commit_id.as_ref(),
            Head::Detached { commit_id } => Some(commit_id),
        }
    }
}

/// The complete state of one simulated repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    pub commits: Vec<Commit>,
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Head>,
}

impl RepositorySnapshot {
    /// The snapshot produced by `init`: no commits, a single unborn
    /// branch, HEAD attached to it.
    pub fn initial(default_branch: BranchName) -> Self {
        Self {
            commits: Vec::new(),
            branches: vec![Branch {
                name: default_branch.clone(),
                commit_id: None,
            }],
            tags: Vec::new(),
            head: Some(Head::Branch {
                ref_name: default_branch,
                commit_id: None,
            }),
        }
    }

    /// Look up a branch by name.
    pub fn branch(&self, name: &BranchName) -> Option<&Branch> {
        self.branches.iter().find(|b| &b.name == name)
    }

    /// Look up a branch by name, mutably.
    pub fn branch_mut(&mut self, name: &BranchName) -> Option<&mut Branch> {
        self.branches.iter_mut().find(|b| &b.name == name)
    }

    /// Whether a branch with this name exists. Accepts raw text so
    /// callers can probe names that fail validation.
    pub fn has_branch(&self, name: &str) -> bool {
        self.branches.iter().any(|b| b.name.as_str() == name)
    }

    /// Look up a commit by id. Accepts raw text so callers can probe
    /// switch targets that may not be ids at all.
    pub fn find_commit(&self, id: &str) -> Option<&Commit> {
        self.commits.iter().find(|c| c.id.as_str() == id)
    }

    /// The branch HEAD is attached to, if HEAD is of branch type.
    pub fn current_branch(&self) -> Option<&BranchName> {
        match &self.head {
            Some(Head::Branch { ref_name, .. }) => Some(ref_name),
            _ => None,
        }
    }
}

/// Serde adapter mapping `Option<CommitId>` to the wire's empty-string
/// sentinel for unborn pointers.
mod id_or_empty {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::core::types::CommitId;

    pub fn serialize<S>(value: &Option<CommitId>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(id) => serializer.serialize_str(id.as_str()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<CommitId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            Ok(None)
        } else {
            CommitId::new(raw).map(Some).map_err(serde::de::Error::custom)
        }
    }
}
