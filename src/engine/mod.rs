//! engine
//!
//! The command engine: tokenize → dispatch → transition.
//!
//! # Architecture
//!
//! [`Engine::execute`] is a pure function over the snapshot value. The
//! engine retains no repository state between invocations; it holds only
//! configuration and the id-generation strategy. The caller supplies the
//! snapshot with every call and persists whatever comes back — two
//! learners' sessions can never interleave against shared state because
//! there is no shared state.
//!
//! # Failure model
//!
//! Every failure is a [`CommandOutcome`] with `success: false` and the
//! caller's snapshot returned untouched. Nothing at this boundary
//! panics or propagates a Rust error.

pub mod command;
pub mod error;
pub mod ident;
pub mod suggest;
pub mod tokenize;
pub mod transitions;

use serde::{Deserialize, Serialize};

use crate::core::config::SimulatorConfig;
use crate::core::snapshot::RepositorySnapshot;

use command::Subcommand;
use error::EngineError;
use ident::{IdGenerator, RandomIdGenerator};
use transitions::Transition;

/// A command submitted for execution, as received over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
    pub command: String,
    pub repository_state: Option<RepositorySnapshot>,
}

/// The result of executing one command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandOutcome {
    pub success: bool,
    pub output: String,
    pub repository_state: Option<RepositorySnapshot>,
}

/// The command engine.
///
/// # Example
///
/// ```
/// use gitdrill::engine::Engine;
///
/// let engine = Engine::default();
/// let outcome = engine.execute(None, "git init");
/// assert!(outcome.success);
/// assert_eq!(outcome.output, "Initialized empty Git repository");
///
/// let outcome = engine.execute(outcome.repository_state, "git status");
/// assert!(outcome.success);
/// assert!(outcome.output.starts_with("On branch main"));
/// ```
pub struct Engine {
    config: SimulatorConfig,
    ids: Box<dyn IdGenerator>,
}

impl Engine {
    /// Create an engine with the production (random) id generator.
    pub fn new(config: SimulatorConfig) -> Self {
        Self::with_id_generator(config, Box::new(RandomIdGenerator))
    }

    /// Create an engine with an injected id-generation strategy.
    pub fn with_id_generator(config: SimulatorConfig, ids: Box<dyn IdGenerator>) -> Self {
        Self { config, ids }
    }

    /// The configuration this engine runs with.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Execute one command line against a snapshot.
    ///
    /// On success the outcome carries the transitioned snapshot; on any
    /// failure it carries `state` exactly as supplied.
    pub fn execute(&self, state: Option<RepositorySnapshot>, line: &str) -> CommandOutcome {
        match self.run(state.clone(), line) {
            Ok(Transition {
                output,
                state: new_state,
            }) => {
                #[cfg(debug_assertions)]
                if let Some(snapshot) = &new_state {
                    debug_assert_eq!(crate::core::verify::verify(snapshot), Ok(()));
                }
                CommandOutcome {
                    success: true,
                    output,
                    repository_state: new_state,
                }
            }
            Err(err) => CommandOutcome {
                success: false,
                output: err.to_string(),
                repository_state: state,
            },
        }
    }

    /// Execute a wire-shaped request. Convenience wrapper over
    /// [`Engine::execute`] for callers that speak the JSON contract.
    pub fn execute_request(&self, request: CommandRequest) -> CommandOutcome {
        self.execute(request.repository_state, &request.command)
    }

    fn run(
        &self,
        state: Option<RepositorySnapshot>,
        line: &str,
    ) -> Result<Transition, EngineError> {
        let parsed = tokenize::tokenize(line, &self.config.program)?;

        let subcommand = match Subcommand::parse(&parsed.subcommand) {
            Some(subcommand) => subcommand,
            None => {
                let suggestion = suggest::closest(&parsed.subcommand);
                return Err(EngineError::UnknownSubcommand {
                    program: parsed.program,
                    command: parsed.subcommand,
                    suggestion,
                })
            }
        };

        match subcommand {
            Subcommand::Init => Ok(transitions::init(state, &self.config.default_branch)),
            Subcommand::Status => transitions::status(state),
            Subcommand::Clear => transitions::clear(state),
            Subcommand::Commit => {
                transitions::commit(state, &parsed.args, self.ids.as_ref(), &self.config.author)
            }
            Subcommand::Branch => transitions::branch(state, &parsed.args),
            Subcommand::Checkout => transitions::checkout(state, &parsed.args),
            Subcommand::Switch => transitions::switch(state, &parsed.args),
            Subcommand::Log | Subcommand::Tag => Err(EngineError::NotImplemented {
                program: parsed.program,
                command: subcommand.name(),
            }),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}
