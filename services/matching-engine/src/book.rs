//! Two-sided sorted order book
//!
//! Each side is a lock-free sorted map from price to level. Keys are
//! encoded so the first entry is always the best price: asks are keyed
//! by price ascending, bids by negated price, which makes best-first
//! iteration uniform for both sides.
//!
//! Level reclamation is the delicate part. Between "a level was emptied"
//! and "its map entry is dropped", a concurrent insert could land in the
//! doomed level and be lost. Three defenses close the race:
//! - the emptier tombstones the level under its lock before releasing;
//! - inserters that observe the tombstone detach that entry and retry
//!   with a fresh level;
//! - the emptier detaches only the exact entry it emptied, never
//!   whatever currently sits at the key.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crossbeam_skiplist::SkipMap;
use parking_lot::RwLock;
use serde::Serialize;
use types::ids::OrderId;
use types::numeric::Price;
use types::order::Side;

use crate::index::OrderIndex;
use crate::level::OrderLevel;
use crate::pool::OrderPool;
use crate::record::OrderRef;

/// One side of the book: a sorted map of price levels.
pub(crate) struct BookSide {
    side: Side,
    pub(crate) levels: SkipMap<i64, Arc<OrderLevel>>,
}

impl BookSide {
    fn new(side: Side) -> Self {
        Self {
            side,
            levels: SkipMap::new(),
        }
    }

    /// Map a price to its sort key. Bids are negated so that the map's
    /// first entry is the highest bid; asks sort naturally.
    pub(crate) fn sort_key(&self, price: Price) -> i64 {
        debug_assert!(price.ticks() != i64::MIN, "price out of range");
        match self.side {
            Side::Buy => price.ticks().wrapping_neg(),
            Side::Sell => price.ticks(),
        }
    }

    /// Inverse of [`BookSide::sort_key`].
    pub(crate) fn price_at(&self, key: i64) -> Price {
        match self.side {
            Side::Buy => Price::from_ticks(key.wrapping_neg()),
            Side::Sell => Price::from_ticks(key),
        }
    }

    /// Best price on this side, read lock-free.
    fn best(&self) -> Option<Price> {
        self.levels.front().map(|entry| self.price_at(*entry.key()))
    }
}

/// Aggregated view of one price level, for market data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepthLevel {
    pub price: Price,
    pub quantity: u64,
    pub orders: usize,
}

/// Sorted two-sided book with the order index and pool back-reference.
pub struct OrderBook {
    bids: BookSide,
    asks: BookSide,
    index: OrderIndex,
    pool: Arc<OrderPool>,
    /// Bumped on every structural change; validates optimistic L1 reads.
    quote_version: AtomicU64,
    quote_lock: RwLock<()>,
}

impl OrderBook {
    pub fn new(pool: Arc<OrderPool>) -> Self {
        Self {
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            index: OrderIndex::new(),
            pool,
            quote_version: AtomicU64::new(0),
            quote_lock: RwLock::new(()),
        }
    }

    pub(crate) fn side(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    pub fn pool(&self) -> &Arc<OrderPool> {
        &self.pool
    }

    pub fn index(&self) -> &OrderIndex {
        &self.index
    }

    /// Best bid, or `None` when the bid side is empty.
    ///
    /// Optimistic read: the lock-free front-key read is validated against
    /// the version stamp; on a concurrent structural change the read
    /// retries once under the shared quote lock. The result may be stale
    /// under concurrent mutation but is never torn.
    pub fn best_bid(&self) -> Option<Price> {
        self.read_best(Side::Buy)
    }

    /// Best ask, or `None` when the ask side is empty.
    pub fn best_ask(&self) -> Option<Price> {
        self.read_best(Side::Sell)
    }

    fn read_best(&self, side: Side) -> Option<Price> {
        let stamp = self.quote_version.load(Ordering::Acquire);
        let best = self.side(side).best();
        if self.quote_version.load(Ordering::Acquire) == stamp {
            return best;
        }
        let _guard = self.quote_lock.read();
        self.side(side).best()
    }

    fn bump_quote(&self) {
        let _guard = self.quote_lock.write();
        self.quote_version.fetch_add(1, Ordering::Release);
    }

    /// Insert an initialized record on its own side and into the index.
    ///
    /// Level creation and first insertion are one observable step per
    /// key: a tombstoned level found at the key is detached and the
    /// insert retried against a fresh level.
    pub(crate) fn add_order(&self, handle: OrderRef) {
        let (order_id, side, price) = self
            .pool
            .read(handle.slot, |rec| (rec.order_id, rec.side, rec.price));
        let book_side = self.side(side);
        let key = book_side.sort_key(price);

        loop {
            let entry = book_side
                .levels
                .get_or_insert_with(key, || Arc::new(OrderLevel::new()));
            let level = Arc::clone(entry.value());
            let mut queue = level.lock();
            if queue.removed() {
                // A concurrent emptier is dropping this level; detach the
                // entry ourselves and retry with a fresh one.
                drop(queue);
                entry.remove();
                continue;
            }
            queue.push_back(&self.pool, handle);
            break;
        }

        self.index.insert(order_id, handle);
        self.bump_quote();
    }

    /// Remove a resting record located through the index.
    ///
    /// Returns false when the handle lost a race with matching: the
    /// record was consumed (stale generation) or already unlinked by the
    /// time the level lock was acquired.
    pub(crate) fn remove_order(&self, handle: OrderRef, order_id: OrderId) -> bool {
        // Snapshot side and price; bail out if the loan already ended.
        let snapshot = self.pool.read(handle.slot, |rec| {
            (rec.generation == handle.generation && rec.order_id == order_id)
                .then_some((rec.side, rec.price))
        });
        let Some((side, price)) = snapshot else {
            return false;
        };

        let book_side = self.side(side);
        let key = book_side.sort_key(price);
        let Some(entry) = book_side.levels.get(&key) else {
            return false;
        };
        let level = Arc::clone(entry.value());
        let mut queue = level.lock();

        // Revalidate under the level lock: a concurrent match may have
        // consumed the record between the snapshot and this point.
        let still_resting = self.pool.is_current(handle)
            && self.pool.read(handle.slot, |rec| rec.order_id == order_id)
            && queue.contains(&self.pool, handle.slot);
        if !still_resting {
            return false;
        }

        queue.unlink(&self.pool, handle.slot);
        let emptied = queue.is_empty();
        if emptied {
            queue.set_removed();
        }
        drop(queue);

        if emptied {
            // Detach only the entry we emptied; a fresh level may already
            // be racing into this key.
            entry.remove();
        }

        self.index.remove(order_id);
        self.bump_quote();
        true
    }

    /// Locate a resting order by id. O(1).
    pub fn find_order(&self, order_id: OrderId) -> Option<OrderRef> {
        self.index.get(order_id)
    }

    /// Aggregated depth for one side, best price first.
    pub fn depth(&self, side: Side) -> Vec<DepthLevel> {
        let book_side = self.side(side);
        book_side
            .levels
            .iter()
            .filter_map(|entry| {
                let queue = entry.value().lock();
                if queue.removed() || queue.is_empty() {
                    return None;
                }
                Some(DepthLevel {
                    price: book_side.price_at(*entry.key()),
                    quantity: queue.total_quantity(&self.pool),
                    orders: queue.len(),
                })
            })
            .collect()
    }

    /// Number of live price levels on one side.
    pub fn level_count(&self, side: Side) -> usize {
        self.side(side).levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.levels.is_empty() && self.asks.levels.is_empty()
    }

    /// Publish a structural change made outside [`OrderBook::add_order`] /
    /// [`OrderBook::remove_order`] (the matching sweep detaches entries
    /// itself).
    pub(crate) fn publish_change(&self) {
        self.bump_quote();
    }
}
