//! engine::ident
//!
//! Commit identifier generation.
//!
//! # Design
//!
//! Identifier generation is a strategy behind the [`IdGenerator`] trait.
//! The production generator draws 20 bytes from the OS-seeded thread RNG
//! and hex-encodes them to 40 characters. Ids are **not**
//! content-addressed and determinism is not part of the contract;
//! callers that want reproducible ids inject [`SequentialIdGenerator`].

use std::sync::atomic::{AtomicU64, Ordering};

use rand::RngCore;

use crate::core::types::CommitId;

/// A source of fresh commit identifiers.
pub trait IdGenerator: Send + Sync {
    /// Produce the next identifier. Every call returns a new id.
    fn next_id(&self) -> CommitId;
}

/// Production generator: 20 random bytes, hex-encoded.
#[derive(Debug, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> CommitId {
        let mut bytes = [0u8; 20];
        rand::rng().fill_bytes(&mut bytes);
        CommitId::from_bytes(bytes)
    }
}

/// Deterministic generator for tests and replay: a monotonically
/// increasing counter rendered as 40 hex digits.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Start counting from `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> CommitId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        let mut bytes = [0u8; 20];
        bytes[12..].copy_from_slice(&n.to_be_bytes());
        CommitId::from_bytes(bytes)
    }
}
