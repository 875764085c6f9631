//! engine::command
//!
//! The closed set of recognized subcommands.
//!
//! # Design
//!
//! Supported operations are a plain enum with exhaustive matching in the
//! dispatcher, so adding a transition is a compile-time-checked
//! extension rather than a runtime string comparison. [`RECOGNIZED`]
//! fixes the order used for suggestion tie-breaking.

/// A recognized subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    Clear,
    Init,
    Commit,
    Branch,
    Checkout,
    Switch,
    Status,
    Log,
    Tag,
}

/// All recognized subcommands, in fixed first-encountered order.
/// Suggestion ties break on this order.
pub const RECOGNIZED: [Subcommand; 9] = [
    Subcommand::Clear,
    Subcommand::Init,
    Subcommand::Commit,
    Subcommand::Branch,
    Subcommand::Checkout,
    Subcommand::Switch,
    Subcommand::Status,
    Subcommand::Log,
    Subcommand::Tag,
];

impl Subcommand {
    /// The subcommand's spelled-out name.
    pub fn name(self) -> &'static str {
        match self {
            Subcommand::Clear => "clear",
            Subcommand::Init => "init",
            Subcommand::Commit => "commit",
            Subcommand::Branch => "branch",
            Subcommand::Checkout => "checkout",
            Subcommand::Switch => "switch",
            Subcommand::Status => "status",
            Subcommand::Log => "log",
            Subcommand::Tag => "tag",
        }
    }

    /// Parse a token against the recognized set.
    pub fn parse(token: &str) -> Option<Self> {
        RECOGNIZED.into_iter().find(|c| c.name() == token)
    }

    /// Whether a transition exists for this subcommand. `log` and `tag`
    /// are reserved and report "not implemented yet" when matched.
    pub fn is_implemented(self) -> bool {
        !matches!(self, Subcommand::Log | Subcommand::Tag)
    }
}
