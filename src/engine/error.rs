//! engine::error
//!
//! The command-engine failure taxonomy.
//!
//! # Design
//!
//! Every failure a command can produce is a variant here, and each
//! variant's `Display` is the exact text the learner sees in the
//! simulated terminal. The engine boundary maps any of these to a
//! `success: false` outcome; none of them ever propagates as a Rust
//! error past [`crate::engine::Engine::execute`].

use thiserror::Error;

/// A failed command, rendered for the simulated terminal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Empty or whitespace-only input. Fails quietly with no message.
    #[error("")]
    EmptyCommand,

    /// First token was not the expected program name.
    #[error("{token}: command not found")]
    ProgramNotFound { token: String },

    /// Program name with nothing after it.
    #[error("{program}: no command provided")]
    NoSubcommand { program: String },

    /// Subcommand outside the recognized set, with an optional
    /// "most similar command" hint.
    #[error("{}", unknown_subcommand_message(.program, .command, .suggestion))]
    UnknownSubcommand {
        program: String,
        command: String,
        suggestion: Option<&'static str>,
    },

    /// Recognized but reserved subcommand.
    #[error("{program}: '{command}' is not implemented yet")]
    NotImplemented {
        program: String,
        command: &'static str,
    },

    /// Operation requires a repository and none exists.
    #[error("fatal: not a git repository (or any of the parent directories): .git")]
    NotARepository,

    /// Operation requires HEAD to reference a branch.
    #[error("fatal: HEAD is not pointing to a branch")]
    DetachedHead,

    /// HEAD names a branch missing from the branch table.
    #[error("fatal: unable to resolve current branch '{name}'")]
    CurrentBranchUnresolvable { name: String },

    /// `commit` invoked without `-m <message>`.
    #[error("error: no commit message provided (use -m \"<message>\")")]
    MissingCommitMessage,

    /// `branch`/`switch -c` target already exists.
    #[error("fatal: a branch named '{name}' already exists")]
    BranchAlreadyExists { name: String },

    /// `checkout` target does not name an existing branch.
    #[error("error: pathspec '{name}' did not match any file(s) known to git")]
    BranchNotFound { name: String },

    /// New branch name fails validation.
    #[error("fatal: '{name}' is not a valid branch name")]
    InvalidBranchName { name: String },

    /// Branching from a branch that has no commits yet.
    #[error("fatal: not a valid commit to branch from")]
    NoValidCommitToBranchFrom,

    /// `switch` target is neither a branch nor a commit id.
    #[error("fatal: invalid reference: {target}")]
    InvalidReference { target: String },

    /// `switch` invoked without a target.
    #[error("fatal: missing branch or commit argument")]
    MissingTarget,
}

fn unknown_subcommand_message(
    program: &str,
    command: &str,
    suggestion: &Option<&'static str>,
) -> String {
    let mut message = format!(
        "{program}: '{command}' is not a git command. See '{program} --help'."
    );
    if let Some(candidate) = suggestion {
        message.push_str(&format!("\n\nThe most similar command is\n\t{candidate}"));
    }
    message
}
