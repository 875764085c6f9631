//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Simulator configuration file (TOML)
//! - `--quiet` / `-q`: Minimal output, no banner or prompt
//! - `--debug`: Enable debug output
//! - `-c <line>`: Run a single command line and exit

use clap::Parser;
use std::path::PathBuf;

/// Gitdrill - a simulated Git terminal for version-control practice
#[derive(Parser, Debug)]
#[command(name = "gitdrill")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a simulator configuration file (TOML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimal output; no banner or prompt
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Run a single command line and exit
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub command: Option<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
