//! Order side
//!
//! Limit orders always carry an explicit price; there are no market
//! orders, so the side is the only order-type dimension.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of the order book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid).
    Buy,
    /// Sell order (ask).
    Sell,
}

impl Side {
    /// Get the opposite side.
    pub const fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Check if this is the buy side.
    pub const fn is_buy(self) -> bool {
        matches!(self, Side::Buy)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}
