//! Log-based market-data publishing.
//!
//! Callbacks run on the engine's mutating thread, so implementations
//! here only format and hand off to `tracing`; they never block and
//! never call back into the engine.

use std::sync::Arc;

use matching_engine::{DepthLevel, MarketDataListener};
use types::numeric::Price;
use types::trade::Trade;

/// Publishes trades, L1, and L2 updates as structured log events.
pub struct LogPublisher;

impl MarketDataListener for LogPublisher {
    fn on_trade(&self, trade: &Trade) {
        tracing::info!(
            buy_order_id = trade.buy_order_id.raw(),
            sell_order_id = trade.sell_order_id.raw(),
            price = %trade.price,
            quantity = trade.quantity.raw(),
            "trade"
        );
    }

    fn on_quote(&self, best_bid: Option<Price>, best_ask: Option<Price>) {
        tracing::info!(
            best_bid = best_bid.map(|p| p.ticks()),
            best_ask = best_ask.map(|p| p.ticks()),
            "quote"
        );
    }

    fn on_depth(&self, bids: &[DepthLevel], asks: &[DepthLevel]) {
        tracing::trace!(
            bid_levels = bids.len(),
            ask_levels = asks.len(),
            "depth update"
        );
    }
}

/// Forwards every callback to a set of listeners.
pub struct FanoutPublisher {
    sinks: Vec<Arc<dyn MarketDataListener>>,
}

impl FanoutPublisher {
    pub fn new(sinks: Vec<Arc<dyn MarketDataListener>>) -> Self {
        Self { sinks }
    }
}

impl MarketDataListener for FanoutPublisher {
    fn on_trade(&self, trade: &Trade) {
        for sink in &self.sinks {
            sink.on_trade(trade);
        }
    }

    fn on_quote(&self, best_bid: Option<Price>, best_ask: Option<Price>) {
        for sink in &self.sinks {
            sink.on_quote(best_bid, best_ask);
        }
    }

    fn on_depth(&self, bids: &[DepthLevel], asks: &[DepthLevel]) {
        for sink in &self.sinks {
            sink.on_depth(bids, asks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use types::ids::OrderId;
    use types::numeric::Quantity;

    #[derive(Default)]
    struct CountingListener {
        trades: AtomicUsize,
        quotes: AtomicUsize,
    }

    impl MarketDataListener for CountingListener {
        fn on_trade(&self, _trade: &Trade) {
            self.trades.fetch_add(1, Ordering::Relaxed);
        }

        fn on_quote(&self, _bid: Option<Price>, _ask: Option<Price>) {
            self.quotes.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn test_fanout_forwards_to_all_sinks() {
        let a = Arc::new(CountingListener::default());
        let b = Arc::new(CountingListener::default());
        let fanout = FanoutPublisher::new(vec![a.clone(), b.clone()]);

        let trade = Trade::new(
            OrderId::new(2),
            OrderId::new(1),
            Price::from_ticks(10500),
            Quantity::new(50),
            0,
        );
        fanout.on_trade(&trade);
        fanout.on_quote(Some(Price::from_ticks(10000)), None);

        for listener in [&a, &b] {
            assert_eq!(listener.trades.load(Ordering::Relaxed), 1);
            assert_eq!(listener.quotes.load(Ordering::Relaxed), 1);
        }
    }
}
