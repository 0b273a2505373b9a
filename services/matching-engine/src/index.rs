//! Order-id index
//!
//! Sharded concurrent map from id to pool handle for O(1) locate on
//! cancel and modify. An id is present iff its record is resting in some
//! level of the book.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use types::ids::OrderId;

use crate::record::OrderRef;

/// OrderId → pool handle lookup.
pub struct OrderIndex {
    map: DashMap<OrderId, OrderRef>,
}

impl OrderIndex {
    pub(crate) fn new() -> Self {
        Self {
            map: DashMap::new(),
        }
    }

    pub(crate) fn insert(&self, order_id: OrderId, handle: OrderRef) {
        self.map.insert(order_id, handle);
    }

    /// Atomically claim an id: inserts the handle only if the id is
    /// absent. The vacancy check and the insert share the map's per-key
    /// lock, so two concurrent submissions of one id cannot both win.
    pub(crate) fn try_insert(&self, order_id: OrderId, handle: OrderRef) -> bool {
        match self.map.entry(order_id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(handle);
                true
            }
        }
    }

    /// O(1) lookup.
    pub fn get(&self, order_id: OrderId) -> Option<OrderRef> {
        self.map.get(&order_id).map(|entry| *entry.value())
    }

    pub(crate) fn remove(&self, order_id: OrderId) -> Option<OrderRef> {
        self.map.remove(&order_id).map(|(_, handle)| handle)
    }

    pub fn contains(&self, order_id: OrderId) -> bool {
        self.map.contains_key(&order_id)
    }

    /// Number of resting orders.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::OrderRef;

    #[test]
    fn test_try_insert_claims_vacant_ids_only() {
        let index = OrderIndex::new();
        let first = OrderRef {
            slot: 1,
            generation: 0,
        };
        let second = OrderRef {
            slot: 2,
            generation: 0,
        };

        assert!(index.try_insert(OrderId::new(7), first));
        assert!(!index.try_insert(OrderId::new(7), second));
        // The loser must not have overwritten the winner's handle.
        assert_eq!(index.get(OrderId::new(7)), Some(first));

        index.remove(OrderId::new(7));
        assert!(index.try_insert(OrderId::new(7), second));
    }

    #[test]
    fn test_index_crud() {
        let index = OrderIndex::new();
        let handle = OrderRef {
            slot: 3,
            generation: 1,
        };

        assert!(!index.contains(OrderId::new(42)));
        index.insert(OrderId::new(42), handle);
        assert!(index.contains(OrderId::new(42)));
        assert_eq!(index.get(OrderId::new(42)), Some(handle));
        assert_eq!(index.len(), 1);

        assert_eq!(index.remove(OrderId::new(42)), Some(handle));
        assert!(index.is_empty());
        assert_eq!(index.remove(OrderId::new(42)), None);
    }
}
