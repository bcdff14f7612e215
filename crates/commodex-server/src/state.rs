use std::sync::Arc;

use commodex_core::QuoteBoard;

/// Shared handler state. The board holds no mutable data, so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<QuoteBoard>,
}

impl AppState {
    pub fn new(board: QuoteBoard) -> Self {
        Self {
            board: Arc::new(board),
        }
    }
}
