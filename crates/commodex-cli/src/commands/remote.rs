use std::sync::Arc;

use commodex_core::{DashboardClient, DashboardFeed, ReqwestHttpClient};

use crate::cli::RemoteArgs;

use super::{CommandResult, Origin};

/// Never fails: an unreachable proxy yields the placeholder board.
pub async fn run(args: &RemoteArgs, timeout_ms: u64) -> CommandResult {
    let client = DashboardClient::new(Arc::new(ReqwestHttpClient::new()), args.endpoint.clone())
        .with_timeout_ms(timeout_ms);

    match client.load().await {
        DashboardFeed::Live(snapshot) => CommandResult::new(snapshot, Origin::Proxy),
        DashboardFeed::Placeholder { snapshot, reason } => {
            CommandResult::new(snapshot, Origin::Placeholder)
                .with_warning(format!("showing placeholder prices: {reason}"))
        }
    }
}
