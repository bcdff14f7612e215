mod board;
mod remote;

use commodex_core::BoardSnapshot;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Where a rendered board came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Provider,
    Proxy,
    Placeholder,
}

pub struct CommandResult {
    pub snapshot: BoardSnapshot,
    pub origin: Origin,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn new(snapshot: BoardSnapshot, origin: Origin) -> Self {
        Self {
            snapshot,
            origin,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    match &cli.command {
        Command::Board(args) => board::run(args, cli.timeout_ms).await,
        Command::Remote(args) => Ok(remote::run(args, cli.timeout_ms).await),
    }
}
