//! Market-data callback surface
//!
//! The engine invokes listeners synchronously from the thread that
//! produced the change. Implementations must be non-blocking and must
//! not call back into the engine.

use types::numeric::Price;
use types::trade::Trade;

use crate::book::DepthLevel;

/// Observer of trades, L1 quote changes, and L2 depth.
pub trait MarketDataListener: Send + Sync {
    /// A trade was executed.
    fn on_trade(&self, _trade: &Trade) {}

    /// Best bid and/or best ask changed.
    fn on_quote(&self, _best_bid: Option<Price>, _best_ask: Option<Price>) {}

    /// Aggregated depth after a book mutation, best price first.
    fn on_depth(&self, _bids: &[DepthLevel], _asks: &[DepthLevel]) {}
}
