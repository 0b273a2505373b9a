//! Trade execution record
//!
//! An immutable match between a buy and a sell order. Trades are
//! committed facts: once returned from the engine they are never
//! rolled back or recycled.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// A single execution between two resting/incoming orders.
///
/// The price is always the resting order's price, never the aggressor's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Id of the buy-side order.
    pub buy_order_id: OrderId,
    /// Id of the sell-side order.
    pub sell_order_id: OrderId,
    /// Execution price (the resting order's price).
    pub price: Price,
    /// Executed quantity, always positive.
    pub quantity: Quantity,
    /// Monotonic timestamp in nanoseconds (see [`crate::clock`]).
    pub executed_at: u64,
}

impl Trade {
    /// Create a new trade record.
    pub fn new(
        buy_order_id: OrderId,
        sell_order_id: OrderId,
        price: Price,
        quantity: Quantity,
        executed_at: u64,
    ) -> Self {
        Self {
            buy_order_id,
            sell_order_id,
            price,
            quantity,
            executed_at,
        }
    }

    /// Traded notional in price ticks, widened to avoid overflow.
    pub fn notional_ticks(&self) -> i128 {
        self.price.ticks() as i128 * self.quantity.raw() as i128
    }
}
