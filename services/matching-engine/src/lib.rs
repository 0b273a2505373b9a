//! Matching Engine Service
//!
//! Concurrent in-memory limit order book with price-time-priority (FIFO)
//! matching, built for high-frequency workloads: hundreds of thousands
//! of operations per second with zero steady-state heap allocation.
//!
//! **Data plane:**
//! - `pool`: preallocated LIFO recycler of order records
//! - `level`: per-price intrusive FIFO queue behind a per-level lock
//! - `index`: OrderId → record handle for O(1) locate
//! - `book`: lock-free sorted side maps plus the reclamation tombstone
//! - `engine`: accept / match / cancel / modify
//!
//! **Key invariants:**
//! - Price-time priority strictly enforced
//! - Execution price is always the resting order's price
//! - Conservation of quantity across trades, residues, and cancels
//! - Every record is either free in the pool, resting in exactly one
//!   level (and in the index), or held by a single in-flight operation

pub mod book;
pub mod engine;
pub mod events;
pub mod index;
pub mod level;
pub mod pool;
pub mod record;

pub use book::{DepthLevel, OrderBook};
pub use engine::MatchingEngine;
pub use events::MarketDataListener;
pub use index::OrderIndex;
pub use level::OrderLevel;
pub use pool::{OrderPool, DEFAULT_CAPACITY};
pub use record::{OrderRecord, OrderRef};
