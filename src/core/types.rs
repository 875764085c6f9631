//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`CommitId`] - Opaque commit identifier (40 hex characters)
//! - [`BranchName`] - Validated branch name
//! - [`Signature`] - Author/committer identity with timestamp
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, so a snapshot built from them can only be
//! corrupted by violating graph invariants, never by malformed fields.
//!
//! # Examples
//!
//! ```
//! use gitdrill::core::types::{BranchName, CommitId};
//!
//! let branch = BranchName::new("feature/login").unwrap();
//! let id = CommitId::new("abc123def4567890abc123def4567890abc12345").unwrap();
//! assert_eq!(id.short(7), "abc123d");
//!
//! assert!(BranchName::new("bad..name").is_err());
//! assert!(CommitId::new("not-hex").is_err());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid commit id: {0}")]
    InvalidCommitId(String),
}

/// An opaque commit identifier.
///
/// Commit ids are 40 lowercase hexadecimal characters. They look like
/// SHA-1 object names but are **not** content-addressed: the simulator
/// draws them from a random source, so two identical commits get
/// unrelated ids.
///
/// # Example
///
/// ```
/// use gitdrill::core::types::CommitId;
///
/// let id = CommitId::new("ABC123DEF4567890ABC123DEF4567890ABC12345").unwrap();
/// assert_eq!(id.as_str(), "abc123def4567890abc123def4567890abc12345");
/// assert_eq!(id.short(7), "abc123d");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitId(String);

impl CommitId {
    /// Length of a commit id in hex characters.
    pub const LEN: usize = 40;

    /// Create a new validated commit id.
    ///
    /// The id is normalized to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidCommitId` if the string is not exactly
    /// 40 hex characters.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into().to_ascii_lowercase();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Create a commit id from 20 raw bytes.
    ///
    /// Hex-encoding 20 bytes always yields exactly 40 valid characters,
    /// so this constructor cannot fail.
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(hex::encode(bytes))
    }

    /// Get an abbreviated form of the id.
    ///
    /// Returns the first `len` characters; the full id if `len` exceeds it.
    ///
    /// # Example
    ///
    /// ```
    /// use gitdrill::core::types::CommitId;
    ///
    /// let id = CommitId::new("abc123def4567890abc123def4567890abc12345").unwrap();
    /// assert_eq!(id.short(7), "abc123d");
    /// ```
    pub fn short(&self, len: usize) -> &str {
        let end = len.min(self.0.len());
        &self.0[..end]
    }

    fn validate(id: &str) -> Result<(), TypeError> {
        if id.len() != Self::LEN {
            return Err(TypeError::InvalidCommitId(format!(
                "expected {} hex characters, got {}",
                Self::LEN,
                id.len()
            )));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypeError::InvalidCommitId(
                "commit id must be hexadecimal".into(),
            ));
        }
        Ok(())
    }

    /// Get the commit id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CommitId {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CommitId> for String {
    fn from(id: CommitId) -> Self {
        id.0
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated branch name.
///
/// The simulator accepts a subset of Git's refname rules:
/// - Cannot be empty or exactly `@`
/// - Cannot start with `.` or `-`
/// - Cannot end with `/` or `.lock`
/// - Cannot contain `..`, `//`, whitespace, control characters,
///   or any of `~ ^ : \ ? * [`
///
/// # Example
///
/// ```
/// use gitdrill::core::types::BranchName;
///
/// let name = BranchName::new("feature/login").unwrap();
/// assert_eq!(name.as_str(), "feature/login");
///
/// assert!(BranchName::new("").is_err());
/// assert!(BranchName::new("-flag").is_err());
/// assert!(BranchName::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranchName` if the name violates the
    /// accepted refname rules.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot be empty".into(),
            ));
        }
        if name == "@" {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot be '@'".into(),
            ));
        }
        if name.starts_with('.') || name.starts_with('-') {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot start with '.' or '-'".into(),
            ));
        }
        if name.ends_with('/') || name.ends_with(".lock") {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot end with '/' or '.lock'".into(),
            ));
        }
        if name.contains("..") || name.contains("//") {
            return Err(TypeError::InvalidBranchName(
                "branch name cannot contain '..' or '//'".into(),
            ));
        }
        const INVALID_CHARS: [char; 7] = ['~', '^', ':', '\\', '?', '*', '['];
        for c in name.chars() {
            if c.is_whitespace() || c.is_ascii_control() || INVALID_CHARS.contains(&c) {
                return Err(TypeError::InvalidBranchName(format!(
                    "branch name cannot contain '{}'",
                    c.escape_default()
                )));
            }
        }
        Ok(())
    }

    /// Get the branch name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BranchName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BranchName> for String {
    fn from(name: BranchName) -> Self {
        name.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An author or committer identity with timestamp.
///
/// Timestamps serialize as ISO-8601 strings via chrono's serde support,
/// which is part of the snapshot wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub email: String,
    pub timestamp: DateTime<Utc>,
}

impl Signature {
    /// Create a signature stamped with the current time.
    pub fn now(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            timestamp: Utc::now(),
        }
    }
}
