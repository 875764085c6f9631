//! Gitdrill - a simulated Git command engine for version-control practice
//!
//! Gitdrill parses one line of shell-like command text, validates it against
//! a small supported grammar, and applies it as a deterministic transition
//! over an in-memory repository snapshot (commit graph, branch pointers,
//! tags, and HEAD). It is the command kernel of a learning platform: the
//! caller supplies the snapshot with every invocation and persists the one
//! that comes back.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, runs the practice loop)
//! - [`engine`] - Tokenize → dispatch → transition pipeline over snapshots
//! - [`core`] - Domain types, snapshot model, invariant verification, config
//! - [`store`] - Snapshot persistence collaborator with optimistic concurrency
//! - [`ui`] - User interaction utilities
//!
//! # Correctness Invariants
//!
//! Gitdrill maintains the following invariants:
//!
//! 1. The engine retains no snapshot between invocations; execution is a
//!    pure function from (snapshot, command text) to (output, snapshot)
//! 2. A failed command never mutates the snapshot it was given
//! 3. Every snapshot returned from a successful transition satisfies the
//!    data-model invariants checked by [`core::verify`]
//! 4. Stored snapshots are versioned; stale writes are rejected, never merged

pub mod cli;
pub mod core;
pub mod engine;
pub mod store;
pub mod ui;
