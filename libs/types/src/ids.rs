//! Unique identifier types for book entities
//!
//! Order ids are caller-assigned 64-bit integers. The engine never
//! generates ids; the boundary (gateway or wire transport) is responsible
//! for uniqueness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Create an id from its raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for OrderId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
