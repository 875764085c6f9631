//! core::verify
//!
//! Snapshot invariant verification.
//!
//! # Checks
//!
//! - Every non-empty branch pointer names a commit in the commit list
//! - HEAD's commit reference names a commit in the commit list
//! - A branch-type HEAD references an existing branch
//! - Commit parents name commits that appear earlier in the list
//!   (commits are append-only)
//! - Branch names, commit ids, and tag names are unique
//!
//! # Invariants
//!
//! - Never mutates the snapshot
//! - Deterministic; reports the first violation found
//!
//! The engine re-verifies every snapshot it produces in debug builds;
//! tests use [`verify`] directly to pin the data-model invariants.

use std::collections::HashSet;

use thiserror::Error;

use super::snapshot::{Head, RepositorySnapshot};

/// Errors from verification.
#[derive(Debug, Error, PartialEq)]
pub enum VerifyError {
    #[error("branch '{branch}' points to unknown commit {commit}")]
    BranchTargetMissing { branch: String, commit: String },

    #[error("HEAD points to unknown commit {commit}")]
    HeadTargetMissing { commit: String },

    #[error("HEAD references unknown branch '{branch}'")]
    HeadBranchMissing { branch: String },

    #[error("commit {commit} references parent {parent} that does not precede it")]
    ParentMissing { commit: String, parent: String },

    #[error("duplicate branch name '{name}'")]
    DuplicateBranch { name: String },

    #[error("duplicate commit id {id}")]
    DuplicateCommit { id: String },

    #[error("duplicate tag name '{name}'")]
    DuplicateTag { name: String },
}

/// Verify the data-model invariants of a snapshot.
///
/// # Errors
///
/// Returns the first violation found; `Ok(())` for a well-formed
/// snapshot.
pub fn verify(snapshot: &RepositorySnapshot) -> Result<(), VerifyError> {
    // Uniqueness and append-only parent order over the commit list.
    let mut seen_commits: HashSet<&str> = HashSet::new();
    for commit in &snapshot.commits {
        for parent in &commit.parents {
            if !seen_commits.contains(parent.as_str()) {
                return Err(VerifyError::ParentMissing {
                    commit: commit.id.to_string(),
                    parent: parent.to_string(),
                });
            }
        }
        if !seen_commits.insert(commit.id.as_str()) {
            return Err(VerifyError::DuplicateCommit {
                id: commit.id.to_string(),
            });
        }
    }

    let mut seen_branches: HashSet<&str> = HashSet::new();
    for branch in &snapshot.branches {
        if !seen_branches.insert(branch.name.as_str()) {
            return Err(VerifyError::DuplicateBranch {
                name: branch.name.to_string(),
            });
        }
        if let Some(commit_id) = &branch.commit_id {
            if !seen_commits.contains(commit_id.as_str()) {
                return Err(VerifyError::BranchTargetMissing {
                    branch: branch.name.to_string(),
                    commit: commit_id.to_string(),
                });
            }
        }
    }

    let mut seen_tags: HashSet<&str> = HashSet::new();
    for tag in &snapshot.tags {
        if !seen_tags.insert(tag.name.as_str()) {
            return Err(VerifyError::DuplicateTag {
                name: tag.name.clone(),
            });
        }
    }

    match &snapshot.head {
        Some(Head::Branch { ref_name, commit_id }) => {
            if !seen_branches.contains(ref_name.as_str()) {
                return Err(VerifyError::HeadBranchMissing {
                    branch: ref_name.to_string(),
                });
            }
            if let Some(commit_id) = commit_id {
                if !seen_commits.contains(commit_id.as_str()) {
                    return Err(VerifyError::HeadTargetMissing {
                        commit: commit_id.to_string(),
                    });
                }
            }
        }
        Some(Head::Detached { commit_id }) => {
            if !seen_commits.contains(commit_id.as_str()) {
                return Err(VerifyError::HeadTargetMissing {
                    commit: commit_id.to_string(),
                });
            }
        }
        None => {}
    }

    Ok(())
}
