//! Behavior-driven tests for the dashboard's proxy consumption
//!
//! The dashboard always has something to render: a live board when the proxy
//! answers, otherwise a locally synthesized placeholder board.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use commodex_core::{
    placeholder_snapshot, BoardSnapshot, Commodity, DashboardClient, DashboardFeed, HttpClient,
    HttpError, HttpRequest, HttpResponse, Quote, UtcDateTime, MISSING_CREDENTIAL,
};

const ENDPOINT: &str = "https://dashboard.test/api/commodities";

/// Answers every request with the same canned result.
struct CannedProxy {
    result: Result<HttpResponse, HttpError>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl CannedProxy {
    fn answering(result: Result<HttpResponse, HttpError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            seen: Mutex::new(Vec::new()),
        })
    }
}

impl HttpClient for CannedProxy {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.seen.lock().expect("seen lock").push(request);
        let result = self.result.clone();
        Box::pin(async move { result })
    }
}

fn live_board() -> BoardSnapshot {
    let gold = Quote {
        current_price: Some(2_050.0),
        change_1h_pct: Some(0.5),
        change_4h_pct: Some(0.5),
        change_24h_pct: Some(2.5),
        ..Quote::empty(Commodity::Gold)
    };

    BoardSnapshot {
        data: Commodity::ALL
            .iter()
            .map(|commodity| {
                if *commodity == Commodity::Gold {
                    gold.clone()
                } else {
                    Quote::empty(*commodity)
                }
            })
            .collect(),
        generated_at: UtcDateTime::parse("2024-05-01T12:00:00Z").expect("valid timestamp"),
        error: None,
    }
}

fn assert_placeholder(feed: &DashboardFeed) -> &str {
    let DashboardFeed::Placeholder { snapshot, reason } = feed else {
        panic!("expected placeholder feed, got {feed:?}");
    };
    assert_eq!(snapshot.data.len(), Commodity::ALL.len());
    assert!(snapshot.data.iter().all(Quote::has_data));
    reason
}

// =============================================================================
// Dashboard: Live Data
// =============================================================================

#[tokio::test]
async fn when_proxy_returns_board_dashboard_renders_it_unchanged() {
    // Given: A proxy serving a real board
    let board = live_board();
    let body = serde_json::to_string(&board).expect("board serializes");
    let proxy = CannedProxy::answering(Ok(HttpResponse::ok_json(body)));
    let client = DashboardClient::new(proxy.clone(), ENDPOINT).with_timeout_ms(3_000);

    // When: The dashboard loads
    let feed = client.load().await;

    // Then: The live board is used as-is
    assert!(!feed.is_placeholder());
    assert_eq!(feed.snapshot(), &board);

    // And: The request targeted the configured endpoint
    let seen = proxy.seen.lock().expect("seen lock");
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].url(), ENDPOINT);
    assert_eq!(seen[0].timeout_ms, 3_000);
}

// =============================================================================
// Dashboard: Placeholder Fallback
// =============================================================================

#[tokio::test]
async fn when_proxy_is_unreachable_dashboard_shows_placeholders() {
    // Given: A proxy that cannot be reached
    let proxy = CannedProxy::answering(Err(HttpError::timeout("request timed out")));
    let client = DashboardClient::new(proxy, ENDPOINT);

    // When: The dashboard loads
    let feed = client.load().await;

    // Then: Placeholder quotes are shown
    let reason = assert_placeholder(&feed);
    assert!(reason.contains("timed out"), "reason was {reason}");
    assert!(reason.contains("source.timeout"), "reason was {reason}");
}

#[tokio::test]
async fn when_proxy_answers_with_server_error_dashboard_shows_placeholders() {
    // Given: A proxy failing with 502
    let proxy = CannedProxy::answering(Ok(HttpResponse::with_status(502, "bad gateway")));
    let client = DashboardClient::new(proxy, ENDPOINT);

    // When: The dashboard loads
    let feed = client.load().await;

    // Then: Placeholder quotes are shown
    let reason = assert_placeholder(&feed);
    assert!(reason.contains("502"), "reason was {reason}");
}

#[tokio::test]
async fn when_proxy_body_is_not_a_board_dashboard_shows_placeholders() {
    // Given: A proxy returning unrelated JSON
    let proxy = CannedProxy::answering(Ok(HttpResponse::ok_json(r#"{"quotes":"soon"}"#)));
    let client = DashboardClient::new(proxy, ENDPOINT);

    // When: The dashboard loads
    let feed = client.load().await;

    // Then: Placeholder quotes are shown
    assert_placeholder(&feed);
}

#[tokio::test]
async fn when_proxy_lacks_credential_dashboard_shows_placeholders_with_reason() {
    // Given: A proxy whose provider credential is missing
    let body = serde_json::to_string(&BoardSnapshot::missing_credential()).expect("serializes");
    let proxy = CannedProxy::answering(Ok(HttpResponse::ok_json(body)));
    let client = DashboardClient::new(proxy, ENDPOINT);

    // When: The dashboard loads
    let feed = client.load().await;

    // Then: The proxy's diagnostic becomes the fallback reason
    assert_eq!(assert_placeholder(&feed), MISSING_CREDENTIAL);
}

#[test]
fn placeholder_board_follows_canonical_order() {
    // Given: A fixed clock
    let now = UtcDateTime::parse("2024-05-01T12:00:00Z").expect("valid timestamp");

    // When: The placeholder board is synthesized
    let snapshot = placeholder_snapshot(now);

    // Then: It lists every commodity once, in order, with a display name
    let ids = snapshot
        .data
        .iter()
        .map(|quote| quote.symbol_id)
        .collect::<Vec<_>>();
    assert_eq!(ids, Commodity::ALL.to_vec());
    for quote in &snapshot.data {
        assert_eq!(quote.display_name, quote.symbol_id.display_name());
    }
    assert_eq!(snapshot.generated_at, now);
}
