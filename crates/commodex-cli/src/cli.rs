//! CLI argument definitions for commodex.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `board` | Fetch every commodity directly from the provider |
//! | `remote` | Read the board from a running commodex server |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--sector` | all | Only show one sector |
//! | `--timeout-ms` | `10000` | Per-call timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! # Board straight from the provider
//! ALPHA_VANTAGE_API_KEY=... commodex board
//!
//! # Metals only, from a deployed proxy
//! commodex remote --endpoint https://example.com/api/commodities --sector metals
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use commodex_core::http_client::DEFAULT_TIMEOUT_MS;
use commodex_core::{Sector, DEFAULT_BASE_URL};

#[derive(Debug, Parser)]
#[command(
    name = "commodex",
    version,
    about = "Commodity price board for energy, metals, and agriculture"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Only show commodities from this sector (energy, metals, agriculture).
    #[arg(long, global = true)]
    pub sector: Option<Sector>,

    /// Per-call timeout in milliseconds.
    #[arg(long, global = true, env = "COMMODEX_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One section per sector.
    Table,
    /// The board as a JSON object.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the board directly from the market data provider.
    Board(BoardArgs),
    /// Read the board from a commodex server, falling back to placeholders.
    Remote(RemoteArgs),
}

#[derive(Args)]
pub struct BoardArgs {
    /// Market data API key.
    #[arg(long, env = "ALPHA_VANTAGE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Provider query endpoint.
    #[arg(long, env = "COMMODEX_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl std::fmt::Debug for BoardArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardArgs")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Args)]
pub struct RemoteArgs {
    /// Board endpoint of a commodex server.
    #[arg(long, env = "COMMODEX_ENDPOINT")]
    pub endpoint: String,
}
