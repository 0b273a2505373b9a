//! Fixed-width binary wire protocol
//!
//! 32-byte little-endian messages for latency-sensitive transports that
//! bypass the JSON boundary. Layout:
//!
//! | Offset | Size | Field    | Notes                         |
//! |-------:|-----:|----------|-------------------------------|
//! | 0      | 1    | type     | `'A'`, `'C'`, `'M'`, `'E'`    |
//! | 1      | 1    | side     | `'B'` or `'S'`, ignored for `'C'` |
//! | 2      | 8    | order_id | u64                           |
//! | 10     | 8    | price    | i64 fixed-point               |
//! | 18     | 8    | quantity | u64                           |
//! | 26     | 6    | padding  | zero-filled on encode         |

pub mod wire;

pub use wire::{decode, encode, MessageType, WireError, WireMessage, MESSAGE_SIZE};
