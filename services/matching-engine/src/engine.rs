//! Price-time-priority matching
//!
//! The engine sweeps the opposite side best price first and consumes
//! orders head-first within each level, so ties at a price fill in
//! arrival order. Execution price is always the resting order's price:
//! the aggressor gets price improvement and the resting side keeps its
//! quoted price.
//!
//! Concurrency: one level lock is held across the inner fill loop.
//! Fully filled resting records are returned to the pool inside that
//! lock; the pool and index locks are strictly below the level lock in
//! the hierarchy, so this cannot deadlock. A level emptied by the sweep
//! is tombstoned under its lock and its map entry detached after
//! release.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use types::clock;
use types::errors::EngineError;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Side;
use types::trade::Trade;

use crate::book::OrderBook;
use crate::events::MarketDataListener;

/// Concurrent matching engine over a shared [`OrderBook`].
///
/// All public operations are safe to call from any number of threads.
/// Effects on the book are serializable; callers needing strict
/// submission ordering must serialize upstream.
pub struct MatchingEngine {
    book: Arc<OrderBook>,
    listeners: RwLock<Vec<Arc<dyn MarketDataListener>>>,
    last_quote: Mutex<(Option<Price>, Option<Price>)>,
}

impl MatchingEngine {
    pub fn new(book: Arc<OrderBook>) -> Self {
        Self {
            book,
            listeners: RwLock::new(Vec::new()),
            last_quote: Mutex::new((None, None)),
        }
    }

    pub fn book(&self) -> &Arc<OrderBook> {
        &self.book
    }

    /// Register a market-data listener.
    pub fn add_listener(&self, listener: Arc<dyn MarketDataListener>) {
        self.listeners.write().push(listener);
    }

    /// Accept a limit order: match whatever crosses, rest the residue.
    ///
    /// Returns every trade produced by this call, in priority order of
    /// the consumed resting orders. `PoolExhausted` rejects the order
    /// without emitting a trade.
    pub fn process_order(
        &self,
        order_id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Result<Vec<Trade>, EngineError> {
        if quantity.is_zero() {
            return Err(EngineError::InvalidQuantity);
        }

        let pool = Arc::clone(self.book.pool());
        let handle = pool.borrow()?;
        pool.init_order(handle, order_id, side, price, quantity);

        // Reserve the id before touching the book. The vacancy check and
        // the insert share the index's per-key lock, so two concurrent
        // submissions of one id cannot both pass; the in-flight record
        // is not linked into any level yet, so a cancel racing this
        // window finds nothing to unlink and reports false.
        if !self.book.index().try_insert(order_id, handle) {
            pool.return_order(handle);
            return Err(EngineError::DuplicateOrder { order_id });
        }

        let (remaining, trades) = self.match_order(order_id, side, price, quantity);

        if !remaining.is_zero() {
            pool.write(handle.slot, |rec| rec.quantity = remaining);
            self.book.add_order(handle);
        } else {
            self.book.index().remove(order_id);
            pool.return_order(handle);
        }

        self.publish(&trades);
        Ok(trades)
    }

    /// Sweep the opposite side. Returns the unmatched remainder and the
    /// trades executed.
    fn match_order(
        &self,
        taker_id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> (Quantity, Vec<Trade>) {
        let mut trades = Vec::new();
        let mut remaining = quantity;
        let pool = self.book.pool();
        let opposite = self.book.side(side.opposite());

        while !remaining.is_zero() {
            let Some(entry) = opposite.levels.front() else {
                break;
            };
            let best_price = opposite.price_at(*entry.key());
            if !crosses(side, price, best_price) {
                break;
            }

            let level = Arc::clone(entry.value());
            let mut queue = level.lock();
            if queue.removed() {
                // Another thread emptied this level; detach the stale
                // entry and look at the next best price.
                drop(queue);
                entry.remove();
                continue;
            }

            while !remaining.is_zero() {
                let Some(head) = queue.front() else {
                    break;
                };
                let (maker_id, maker_qty) =
                    pool.read(head, |rec| (rec.order_id, rec.quantity));

                let fill = remaining.min(maker_qty);
                trades.push(make_trade(side, taker_id, maker_id, best_price, fill));

                remaining -= fill;
                let maker_left = maker_qty - fill;
                pool.write(head, |rec| rec.quantity = maker_left);

                if maker_left.is_zero() {
                    queue.pop_front(pool);
                    self.book.index().remove(maker_id);
                    pool.return_order(pool.handle(head));
                }
            }

            let emptied = queue.is_empty();
            if emptied {
                queue.set_removed();
            }
            drop(queue);

            if emptied {
                // Detach only the entry this sweep emptied.
                entry.remove();
                self.book.publish_change();
            }
        }

        (remaining, trades)
    }

    /// Cancel a resting order by id.
    ///
    /// Returns false for ids that are unknown, fully filled, or already
    /// cancelled; true when the residue was removed. Must not be called
    /// while holding a level lock.
    pub fn cancel_order(&self, order_id: OrderId) -> bool {
        let Some(handle) = self.book.find_order(order_id) else {
            return false;
        };
        if !self.book.remove_order(handle, order_id) {
            // Lost the race against a concurrent match.
            return false;
        }
        self.book.pool().return_order(handle);
        self.publish(&[]);
        true
    }

    /// Replace a resting order: cancel, then resubmit under the same id.
    ///
    /// Time priority is lost even when price and quantity are unchanged.
    /// Not atomic with respect to interleaved orders; returns empty
    /// without inserting when the cancel finds nothing.
    pub fn modify_order(
        &self,
        order_id: OrderId,
        side: Side,
        new_price: Price,
        new_quantity: Quantity,
    ) -> Result<Vec<Trade>, EngineError> {
        if !self.cancel_order(order_id) {
            return Ok(Vec::new());
        }
        self.process_order(order_id, side, new_price, new_quantity)
    }

    /// Notify listeners after a completed mutation, with no locks held.
    fn publish(&self, trades: &[Trade]) {
        let listeners = self.listeners.read();
        if listeners.is_empty() {
            return;
        }

        for trade in trades {
            for listener in listeners.iter() {
                listener.on_trade(trade);
            }
        }

        let quote = (self.book.best_bid(), self.book.best_ask());
        let changed = {
            let mut last = self.last_quote.lock();
            if *last == quote {
                false
            } else {
                *last = quote;
                true
            }
        };
        if changed {
            for listener in listeners.iter() {
                listener.on_quote(quote.0, quote.1);
            }
        }

        let bids = self.book.depth(Side::Buy);
        let asks = self.book.depth(Side::Sell);
        for listener in listeners.iter() {
            listener.on_depth(&bids, &asks);
        }
    }
}

/// Crossing predicate: a buy crosses when its price reaches the best
/// ask, a sell when its price reaches down to the best bid.
fn crosses(side: Side, taker_price: Price, best_opposite: Price) -> bool {
    match side {
        Side::Buy => taker_price >= best_opposite,
        Side::Sell => taker_price <= best_opposite,
    }
}

fn make_trade(
    taker_side: Side,
    taker_id: OrderId,
    maker_id: OrderId,
    price: Price,
    quantity: Quantity,
) -> Trade {
    let (buy_id, sell_id) = match taker_side {
        Side::Buy => (taker_id, maker_id),
        Side::Sell => (maker_id, taker_id),
    };
    Trade::new(buy_id, sell_id, price, quantity, clock::monotonic_nanos())
}
