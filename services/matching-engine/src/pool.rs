//! Preallocated order recycler
//!
//! All records are allocated once at startup; the hot path only moves
//! slot indices on and off a LIFO free stack. LIFO keeps recently
//! returned slots cache-warm for the next borrower.
//!
//! Locking: the free stack has its own mutex, and each slot carries a
//! short-lived mutex for field access. Both are leaves in the lock
//! hierarchy and are never held across another lock acquisition.

use parking_lot::{Mutex, MutexGuard};
use types::errors::EngineError;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Side;

use crate::record::{OrderRecord, OrderRef, NIL};

/// Default number of preallocated order slots.
pub const DEFAULT_CAPACITY: usize = 100_000;

/// Bounded LIFO recycler of [`OrderRecord`] slots.
pub struct OrderPool {
    slots: Box<[Mutex<OrderRecord>]>,
    free: Mutex<Vec<u32>>,
    capacity: usize,
}

impl OrderPool {
    /// Create a pool with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a pool with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "pool capacity must be positive");
        assert!(
            capacity < NIL as usize,
            "pool capacity exceeds the slot index range"
        );

        let slots: Vec<Mutex<OrderRecord>> = (0..capacity)
            .map(|_| Mutex::new(OrderRecord::vacant()))
            .collect();
        // Reversed so slot 0 is borrowed first.
        let free: Vec<u32> = (0..capacity as u32).rev().collect();

        Self {
            slots: slots.into_boxed_slice(),
            free: Mutex::new(free),
            capacity,
        }
    }

    /// Borrow a free slot. O(1).
    pub fn borrow(&self) -> Result<OrderRef, EngineError> {
        let slot = self
            .free
            .lock()
            .pop()
            .ok_or(EngineError::PoolExhausted {
                capacity: self.capacity,
            })?;
        let generation = self.slots[slot as usize].lock().generation;
        Ok(OrderRef { slot, generation })
    }

    /// Initialize a freshly borrowed record.
    pub(crate) fn init_order(
        &self,
        handle: OrderRef,
        order_id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) {
        let mut rec = self.lock_slot(handle.slot);
        assert_eq!(
            rec.generation, handle.generation,
            "pool: init through a stale handle for slot {}",
            handle.slot
        );
        rec.init(order_id, side, price, quantity);
    }

    /// Return a slot to the pool. O(1).
    ///
    /// The record is zeroed and its generation bumped before the slot is
    /// published as free. Double returns, returns through stale handles,
    /// and returns of still-linked records are invariant violations and
    /// panic.
    pub fn return_order(&self, handle: OrderRef) {
        {
            let mut rec = self.lock_slot(handle.slot);
            assert_eq!(
                rec.generation, handle.generation,
                "pool: double or foreign return of slot {}",
                handle.slot
            );
            assert!(
                rec.next == NIL && rec.prev == NIL,
                "pool: returned record for order {} is still linked into a level",
                rec.order_id
            );
            rec.reset();
            rec.generation += 1;
        }

        let mut free = self.free.lock();
        assert!(
            free.len() < self.capacity,
            "pool overflow: more returns than borrows"
        );
        free.push(handle.slot);
    }

    /// Number of free slots.
    pub fn available(&self) -> usize {
        self.free.lock().len()
    }

    /// Number of slots currently on loan.
    pub fn in_use(&self) -> usize {
        self.capacity - self.available()
    }

    /// Total slot count.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Re-derive a handle for a slot from its current generation.
    ///
    /// Only valid while the caller knows the slot is on loan to it, e.g.
    /// for a record it just unlinked under the level lock.
    pub(crate) fn handle(&self, slot: u32) -> OrderRef {
        let generation = self.lock_slot(slot).generation;
        OrderRef { slot, generation }
    }

    /// Read record fields under the slot lock.
    pub(crate) fn read<R>(&self, slot: u32, f: impl FnOnce(&OrderRecord) -> R) -> R {
        f(&self.lock_slot(slot))
    }

    /// Mutate record fields under the slot lock.
    pub(crate) fn write<R>(&self, slot: u32, f: impl FnOnce(&mut OrderRecord) -> R) -> R {
        f(&mut self.lock_slot(slot))
    }

    /// Check whether a handle still refers to the loan it was issued for.
    pub(crate) fn is_current(&self, handle: OrderRef) -> bool {
        self.lock_slot(handle.slot).generation == handle.generation
    }

    fn lock_slot(&self, slot: u32) -> MutexGuard<'_, OrderRecord> {
        self.slots[slot as usize].lock()
    }
}

impl Default for OrderPool {
    fn default() -> Self {
        Self::new()
    }
}
