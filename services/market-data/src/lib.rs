//! Market Data Service
//!
//! Listener implementations for the engine's synchronous callback
//! surface: structured-log publishing of trades and quotes, a fan-out
//! composite, and a bounded tape of recent trades backing the REST
//! trade feed.

pub mod publisher;
pub mod tape;

pub use publisher::{FanoutPublisher, LogPublisher};
pub use tape::{TradeTape, DEFAULT_TAPE_CAPACITY};
