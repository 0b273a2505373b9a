//! Message codec for the fixed-width wire format.

use thiserror::Error;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Side;

/// Every message occupies exactly this many bytes on the wire.
pub const MESSAGE_SIZE: usize = 32;

const OFF_TYPE: usize = 0;
const OFF_SIDE: usize = 1;
const OFF_ORDER_ID: usize = 2;
const OFF_PRICE: usize = 10;
const OFF_QUANTITY: usize = 18;

/// Message type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MessageType {
    /// Add a new limit order.
    Add = b'A',
    /// Cancel a resting order by id.
    Cancel = b'C',
    /// Modify a resting order (cancel + resubmit, loses time priority).
    Modify = b'M',
    /// Trade execution report (outbound).
    Execute = b'E',
}

impl TryFrom<u8> for MessageType {
    type Error = WireError;

    fn try_from(value: u8) -> Result<Self, WireError> {
        match value {
            b'A' => Ok(MessageType::Add),
            b'C' => Ok(MessageType::Cancel),
            b'M' => Ok(MessageType::Modify),
            b'E' => Ok(MessageType::Execute),
            other => Err(WireError::UnknownType(other)),
        }
    }
}

/// Decoded wire message.
///
/// `side` is `None` only for cancels, where the wire byte is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireMessage {
    pub msg_type: MessageType,
    pub side: Option<Side>,
    pub order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
}

impl WireMessage {
    /// Build an add-order message.
    pub fn add(side: Side, order_id: OrderId, price: Price, quantity: Quantity) -> Self {
        Self {
            msg_type: MessageType::Add,
            side: Some(side),
            order_id,
            price,
            quantity,
        }
    }

    /// Build a cancel message. Price and quantity are zero on the wire.
    pub fn cancel(order_id: OrderId) -> Self {
        Self {
            msg_type: MessageType::Cancel,
            side: None,
            order_id,
            price: Price::ZERO,
            quantity: Quantity::ZERO,
        }
    }

    /// Build a modify message.
    pub fn modify(side: Side, order_id: OrderId, price: Price, quantity: Quantity) -> Self {
        Self {
            msg_type: MessageType::Modify,
            side: Some(side),
            order_id,
            price,
            quantity,
        }
    }

    /// Build an execution report.
    pub fn execute(side: Side, order_id: OrderId, price: Price, quantity: Quantity) -> Self {
        Self {
            msg_type: MessageType::Execute,
            side: Some(side),
            order_id,
            price,
            quantity,
        }
    }
}

/// Codec failures. All are validation errors raised at the boundary;
/// malformed messages never reach the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("message truncated: need {MESSAGE_SIZE} bytes, got {0}")]
    Truncated(usize),

    #[error("unknown message type: {0:#04x}")]
    UnknownType(u8),

    #[error("unknown side: {0:#04x}")]
    UnknownSide(u8),
}

fn side_byte(side: Option<Side>) -> u8 {
    match side {
        Some(Side::Buy) => b'B',
        Some(Side::Sell) => b'S',
        None => 0,
    }
}

fn read_u64(buf: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buf[offset..offset + 8]);
    u64::from_le_bytes(bytes)
}

/// Encode a message into a fixed 32-byte frame, padding zero-filled.
pub fn encode(msg: &WireMessage) -> [u8; MESSAGE_SIZE] {
    let mut buf = [0u8; MESSAGE_SIZE];
    buf[OFF_TYPE] = msg.msg_type as u8;
    buf[OFF_SIDE] = side_byte(msg.side);
    buf[OFF_ORDER_ID..OFF_ORDER_ID + 8].copy_from_slice(&msg.order_id.raw().to_le_bytes());
    buf[OFF_PRICE..OFF_PRICE + 8].copy_from_slice(&msg.price.ticks().to_le_bytes());
    buf[OFF_QUANTITY..OFF_QUANTITY + 8].copy_from_slice(&msg.quantity.raw().to_le_bytes());
    buf
}

/// Decode one message from the front of `buf`.
///
/// Non-zero padding bytes are tolerated; the side byte of a cancel is
/// ignored entirely.
pub fn decode(buf: &[u8]) -> Result<WireMessage, WireError> {
    if buf.len() < MESSAGE_SIZE {
        return Err(WireError::Truncated(buf.len()));
    }

    let msg_type = MessageType::try_from(buf[OFF_TYPE])?;
    let side = match (msg_type, buf[OFF_SIDE]) {
        (MessageType::Cancel, _) => None,
        (_, b'B') => Some(Side::Buy),
        (_, b'S') => Some(Side::Sell),
        (_, other) => return Err(WireError::UnknownSide(other)),
    };

    Ok(WireMessage {
        msg_type,
        side,
        order_id: OrderId::new(read_u64(buf, OFF_ORDER_ID)),
        price: Price::from_ticks(read_u64(buf, OFF_PRICE) as i64),
        quantity: Quantity::new(read_u64(buf, OFF_QUANTITY)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_add_golden_bytes() {
        let msg = WireMessage::add(
            Side::Buy,
            OrderId::new(0x0102030405060708),
            Price::from_ticks(10500),
            Quantity::new(100),
        );
        let buf = encode(&msg);

        assert_eq!(buf.len(), MESSAGE_SIZE);
        assert_eq!(buf[0], b'A');
        assert_eq!(buf[1], b'B');
        // Little-endian order id
        assert_eq!(
            &buf[2..10],
            &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
        );
        // 10500 = 0x2904
        assert_eq!(&buf[10..18], &[0x04, 0x29, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&buf[18..26], &[100, 0, 0, 0, 0, 0, 0, 0]);
        // Padding zero-filled
        assert_eq!(&buf[26..32], &[0; 6]);
    }

    #[test]
    fn test_roundtrip_all_types() {
        let messages = [
            WireMessage::add(
                Side::Sell,
                OrderId::new(1),
                Price::from_ticks(10500),
                Quantity::new(100),
            ),
            WireMessage::cancel(OrderId::new(42)),
            WireMessage::modify(
                Side::Buy,
                OrderId::new(7),
                Price::from_ticks(9900),
                Quantity::new(25),
            ),
            WireMessage::execute(
                Side::Buy,
                OrderId::new(9),
                Price::from_ticks(10000),
                Quantity::new(10),
            ),
        ];

        for msg in &messages {
            let buf = encode(msg);
            let decoded = decode(&buf).unwrap();
            assert_eq!(&decoded, msg);
        }
    }

    #[test]
    fn test_negative_price_roundtrip() {
        let msg = WireMessage::add(
            Side::Buy,
            OrderId::new(1),
            Price::from_ticks(-50),
            Quantity::new(1),
        );
        let decoded = decode(&encode(&msg)).unwrap();
        assert_eq!(decoded.price, Price::from_ticks(-50));
    }

    #[test]
    fn test_cancel_ignores_side_byte() {
        let mut buf = encode(&WireMessage::cancel(OrderId::new(5)));
        buf[1] = 0xFF;
        let decoded = decode(&buf).unwrap();
        assert_eq!(decoded.msg_type, MessageType::Cancel);
        assert_eq!(decoded.side, None);
        assert_eq!(decoded.order_id, OrderId::new(5));
    }

    #[test]
    fn test_truncated_buffer() {
        let buf = [0u8; 16];
        assert_eq!(decode(&buf), Err(WireError::Truncated(16)));
    }

    #[test]
    fn test_unknown_type() {
        let mut buf = [0u8; MESSAGE_SIZE];
        buf[0] = b'X';
        assert_eq!(decode(&buf), Err(WireError::UnknownType(b'X')));
    }

    #[test]
    fn test_unknown_side() {
        let mut buf = encode(&WireMessage::add(
            Side::Buy,
            OrderId::new(1),
            Price::from_ticks(100),
            Quantity::new(1),
        ));
        buf[1] = b'Z';
        assert_eq!(decode(&buf), Err(WireError::UnknownSide(b'Z')));
    }

    #[test]
    fn test_nonzero_padding_tolerated() {
        let mut buf = encode(&WireMessage::cancel(OrderId::new(5)));
        buf[31] = 0xAA;
        assert!(decode(&buf).is_ok());
    }
}
