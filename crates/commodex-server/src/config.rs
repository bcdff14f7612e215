//! Command-line and environment configuration for the proxy.
//!
//! | Option | Env | Default |
//! |--------|-----|---------|
//! | `--listen` | `COMMODEX_LISTEN` | `0.0.0.0:8787` |
//! | `--api-key` | `ALPHA_VANTAGE_API_KEY` | unset |
//! | `--base-url` | `COMMODEX_BASE_URL` | Alpha Vantage query endpoint |
//! | `--timeout-ms` | `COMMODEX_TIMEOUT_MS` | `10000` |

use std::net::SocketAddr;

use clap::Parser;
use commodex_core::http_client::DEFAULT_TIMEOUT_MS;
use commodex_core::{ProviderConfig, DEFAULT_BASE_URL};

/// Default `RUST_LOG` directive when none is set.
pub const DEFAULT_LOG_FILTER: &str = "commodex_server=debug,tower_http=info,info";

#[derive(Parser)]
#[command(
    name = "commodex-server",
    version,
    about = "Serves the commodity board over HTTP"
)]
pub struct ServerArgs {
    /// Address to listen on.
    #[arg(long, env = "COMMODEX_LISTEN", default_value = "0.0.0.0:8787")]
    pub listen: SocketAddr,

    /// Market data API key. Without it the board is served empty with an error.
    #[arg(long, env = "ALPHA_VANTAGE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Provider query endpoint.
    #[arg(long, env = "COMMODEX_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-call provider timeout in milliseconds.
    #[arg(long, env = "COMMODEX_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,
}

impl ServerArgs {
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::new(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout_ms(self.timeout_ms)
    }
}
