//! Shared domain types for the order book engine
//!
//! This library provides all core type definitions used across the
//! workspace, keeping the wire, REST, and matching crates in agreement
//! on prices, quantities, identifiers, and the error taxonomy.
//!
//! # Modules
//! - `ids`: Unique identifiers (OrderId)
//! - `numeric`: Fixed-point numeric types (Price, Quantity)
//! - `order`: Order side
//! - `trade`: Trade execution record
//! - `errors`: Error taxonomy
//! - `clock`: Monotonic timestamp source

pub mod clock;
pub mod errors;
pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;

pub use errors::EngineError;
pub use ids::OrderId;
pub use numeric::{Price, Quantity};
pub use order::Side;
pub use trade::Trade;
