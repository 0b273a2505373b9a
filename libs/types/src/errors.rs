//! Error taxonomy for the matching engine
//!
//! Only recoverable conditions are modelled here. Invariant violations
//! (pool overflow, double return of a slot, quantity underflow) indicate
//! memory-safety loss and panic with a diagnostic instead.

use crate::ids::OrderId;
use thiserror::Error;

/// Errors surfaced to callers of the matching engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Every pool slot is on loan; the order is rejected, no trade emitted.
    #[error("order pool exhausted: all {capacity} slots are on loan")]
    PoolExhausted { capacity: usize },

    /// Quantity must be positive at submission.
    #[error("quantity must be positive")]
    InvalidQuantity,

    /// An order with this id is already resting on the book.
    #[error("order {order_id} is already resting on the book")]
    DuplicateOrder { order_id: OrderId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::PoolExhausted { capacity: 100 };
        assert_eq!(
            err.to_string(),
            "order pool exhausted: all 100 slots are on loan"
        );

        let err = EngineError::DuplicateOrder {
            order_id: OrderId::new(7),
        };
        assert!(err.to_string().contains('7'));
    }
}
