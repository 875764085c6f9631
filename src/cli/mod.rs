//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and flags
//! - Load simulator configuration
//! - Run the practice loop, threading the snapshot through the engine
//!
//! # Architecture
//!
//! The CLI layer is thin. It owns the current snapshot the way any
//! engine caller does — as a value handed to [`Engine::execute`] and
//! replaced by the outcome — and never inspects or mutates repository
//! state itself.

pub mod args;

pub use args::Cli;

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::core::config::SimulatorConfig;
use crate::core::snapshot::RepositorySnapshot;
use crate::engine::Engine;
use crate::ui::{self, Verbosity};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    let config = match &cli.config {
        Some(path) => SimulatorConfig::load(path)?,
        None => SimulatorConfig::default(),
    };
    let engine = Engine::new(config);

    if let Some(line) = &cli.command {
        let outcome = engine.execute(None, line);
        if !outcome.output.is_empty() {
            println!("{}", outcome.output);
        }
        if !outcome.success {
            std::process::exit(1);
        }
        return Ok(());
    }

    practice_loop(&engine, verbosity)
}

/// Read command lines from stdin until EOF or `exit`/`quit`, executing
/// each against the running snapshot.
fn practice_loop(engine: &Engine, verbosity: Verbosity) -> Result<()> {
    ui::print(
        format!(
            "gitdrill {} - type version-control commands, 'exit' to quit",
            env!("CARGO_PKG_VERSION")
        ),
        verbosity,
    );

    let stdin = io::stdin();
    let mut state: Option<RepositorySnapshot> = None;
    let mut line = String::new();

    loop {
        if verbosity != Verbosity::Quiet {
            print!("> ");
            io::stdout().flush()?;
        }

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }

        let outcome = engine.execute(state.take(), trimmed);
        if !outcome.output.is_empty() {
            println!("{}", outcome.output);
        }
        ui::debug(
            format!(
                "success={} initialized={}",
                outcome.success,
                outcome.repository_state.is_some()
            ),
            verbosity,
        );
        state = outcome.repository_state;
    }

    Ok(())
}
