//! Pool-resident order record
//!
//! The record doubles as the FIFO list node for its price level: the
//! `next`/`prev` fields are slot indices into the pool arena, so linking
//! and unlinking never allocate. A record belongs to at most one level
//! at a time; while unlinked both indices are [`NIL`].

use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Side;

/// Sentinel slot index meaning "no link".
pub(crate) const NIL: u32 = u32::MAX;

/// Fixed-width order datum living in an [`crate::pool::OrderPool`] slot.
#[derive(Debug, Clone, Copy)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub side: Side,
    pub price: Price,
    /// Remaining quantity; always positive while resting.
    pub quantity: Quantity,
    /// Next record in the level queue (towards the tail).
    pub(crate) next: u32,
    /// Previous record in the level queue (towards the head).
    pub(crate) prev: u32,
    /// Bumped on every return to the pool; detects stale handles.
    pub(crate) generation: u64,
}

impl OrderRecord {
    /// A never-loaned slot.
    pub(crate) fn vacant() -> Self {
        Self {
            order_id: OrderId::new(0),
            side: Side::Buy,
            price: Price::ZERO,
            quantity: Quantity::ZERO,
            next: NIL,
            prev: NIL,
            generation: 0,
        }
    }

    /// Initialize a freshly borrowed record.
    pub(crate) fn init(&mut self, order_id: OrderId, side: Side, price: Price, quantity: Quantity) {
        self.order_id = order_id;
        self.side = side;
        self.price = price;
        self.quantity = quantity;
        self.next = NIL;
        self.prev = NIL;
    }

    /// Zero all fields except the generation counter. Must run before the
    /// slot is published as free so the next borrower never sees stale
    /// intrusive links.
    pub(crate) fn reset(&mut self) {
        self.order_id = OrderId::new(0);
        self.side = Side::Buy;
        self.price = Price::ZERO;
        self.quantity = Quantity::ZERO;
        self.next = NIL;
        self.prev = NIL;
    }
}

/// Handle to a loaned pool slot.
///
/// The generation snapshot makes handles tamper-evident: once the slot is
/// returned and re-issued, every old handle stops validating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRef {
    pub(crate) slot: u32,
    pub(crate) generation: u64,
}
