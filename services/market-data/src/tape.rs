//! Bounded trade history.
//!
//! Ring buffer of the most recent trades, newest last. Feeds the REST
//! trade feed; trades are immutable so the tape only ever copies.

use std::collections::VecDeque;

use matching_engine::MarketDataListener;
use parking_lot::Mutex;
use types::trade::Trade;

/// Default number of trades retained.
pub const DEFAULT_TAPE_CAPACITY: usize = 100;

/// Bounded ring of recent trades.
pub struct TradeTape {
    ring: Mutex<VecDeque<Trade>>,
    capacity: usize,
}

impl TradeTape {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "tape capacity must be positive");
        Self {
            ring: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Recent trades, oldest first / newest last.
    pub fn recent(&self) -> Vec<Trade> {
        self.ring.lock().iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ring.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.lock().is_empty()
    }
}

impl Default for TradeTape {
    fn default() -> Self {
        Self::new(DEFAULT_TAPE_CAPACITY)
    }
}

impl MarketDataListener for TradeTape {
    fn on_trade(&self, trade: &Trade) {
        let mut ring = self.ring.lock();
        if ring.len() == self.capacity {
            ring.pop_front();
        }
        ring.push_back(*trade);
    }
}
