//! engine::tokenize
//!
//! Command-line tokenization.
//!
//! # Contract
//!
//! A raw line splits on runs of whitespace into a program name, a
//! subcommand, and the remaining arguments. Tokenization never panics:
//! an empty line, a wrong program name, or a missing subcommand are all
//! well-defined failure outcomes, reported through [`EngineError`] and
//! leaving the snapshot untouched.

use super::error::EngineError;

/// A tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub subcommand: String,
    pub args: Vec<String>,
}

/// Split a raw line into program, subcommand, and arguments.
///
/// # Errors
///
/// - [`EngineError::EmptyCommand`] for empty or whitespace-only input
/// - [`EngineError::ProgramNotFound`] if the first token is not
///   `expected_program`
/// - [`EngineError::NoSubcommand`] if nothing follows the program name
pub fn tokenize(line: &str, expected_program: &str) -> Result<CommandLine, EngineError> {
    let mut tokens = line.split_whitespace();

    let program = match tokens.next() {
        Some(token) => token,
        None => return Err(EngineError::EmptyCommand),
    };
    if program != expected_program {
        return Err(EngineError::ProgramNotFound {
            token: program.to_string(),
        });
    }

    let subcommand = match tokens.next() {
        Some(token) => token,
        None => {
            return Err(EngineError::NoSubcommand {
                program: program.to_string(),
            })
        }
    };

    Ok(CommandLine {
        program: program.to_string(),
        subcommand: subcommand.to_string(),
        args: tokens.map(str::to_string).collect(),
    })
}
