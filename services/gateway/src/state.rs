use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use market_data::TradeTape;
use matching_engine::MatchingEngine;

/// Order ids generated for requests that omit one start here, well above
/// the seeded demo range.
const GENERATED_ID_BASE: u64 = 1_000_000;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<MatchingEngine>,
    pub tape: Arc<TradeTape>,
    id_source: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(engine: Arc<MatchingEngine>, tape: Arc<TradeTape>) -> Self {
        Self {
            engine,
            tape,
            id_source: Arc::new(AtomicU64::new(GENERATED_ID_BASE)),
        }
    }

    /// Next server-assigned order id.
    pub fn next_order_id(&self) -> u64 {
        self.id_source.fetch_add(1, Ordering::Relaxed)
    }
}
