use serde::{Deserialize, Serialize};
use types::numeric::{Price, Quantity};
use types::order::Side;

use matching_engine::DepthLevel;

/// Order submission body. Prices and quantities are raw fixed-point
/// integers (10500 = $105.00). The order id is optional; the gateway
/// assigns one when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRequest {
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
    pub order_id: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Rested on the book without matching.
    Accepted,
    /// Produced at least one trade.
    Matched,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub order_id: u64,
    pub status: OrderStatus,
    pub trades_count: usize,
    pub remaining_quantity: Quantity,
}

#[derive(Debug, Clone, Serialize)]
pub struct CancelResponse {
    pub status: &'static str,
    pub order_id: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub best_bid: Option<Price>,
    pub best_ask: Option<Price>,
    pub spread: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookLevel {
    pub price: Price,
    pub quantity: u64,
    pub orders: usize,
}

impl From<DepthLevel> for BookLevel {
    fn from(level: DepthLevel) -> Self {
        Self {
            price: level.price,
            quantity: level.quantity,
            orders: level.orders,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookResponse {
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub pool_capacity: usize,
    pub pool_available: usize,
    pub pool_in_use: usize,
    pub active_orders: usize,
    pub bid_levels: usize,
    pub ask_levels: usize,
    pub recent_trades: usize,
}
