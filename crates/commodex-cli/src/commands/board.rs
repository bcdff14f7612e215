use std::sync::Arc;

use commodex_core::{ProviderConfig, QuoteBoard, ReqwestHttpClient};
use tracing::debug;

use crate::cli::BoardArgs;
use crate::error::CliError;

use super::{CommandResult, Origin};

pub async fn run(args: &BoardArgs, timeout_ms: u64) -> Result<CommandResult, CliError> {
    let config = ProviderConfig::new(args.api_key.clone())
        .with_base_url(args.base_url.clone())
        .with_timeout_ms(timeout_ms);
    config.validate()?;

    let board = QuoteBoard::from_config(&config, Arc::new(ReqwestHttpClient::new()));
    let mut snapshot = board.snapshot().await;
    debug!(quotes = snapshot.data.len(), "provider board fetched");

    if let Some(error) = snapshot.error.take() {
        return Err(CliError::Unavailable(error));
    }

    let missing = snapshot
        .data
        .iter()
        .filter(|quote| !quote.has_data())
        .map(|quote| quote.symbol_id.as_str())
        .collect::<Vec<_>>();
    let warning = (!missing.is_empty())
        .then(|| format!("no data for {}", missing.join(", ")));

    let mut result = CommandResult::new(snapshot, Origin::Provider);
    if let Some(warning) = warning {
        result = result.with_warning(warning);
    }
    Ok(result)
}
