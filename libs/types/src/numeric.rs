//! Fixed-point numeric types for prices and quantities
//!
//! Prices are signed 64-bit integers scaled by 100 (10500 = $105.00),
//! quantities are unsigned 64-bit share counts. Integer arithmetic keeps
//! matching deterministic and allocation-free; no floating point anywhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Fixed-point price, scaled by [`Price::SCALE`].
///
/// Signed so that future negative spreads remain representable.
/// Serialized as the raw scaled integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Number of ticks per whole currency unit.
    pub const SCALE: i64 = 100;

    /// Zero price, used for vacant pool slots.
    pub const ZERO: Self = Self(0);

    /// Create a price from its scaled integer representation.
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    /// Raw scaled integer value.
    pub const fn ticks(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(
            f,
            "{}{}.{:02}",
            sign,
            abs / Self::SCALE as u64,
            abs % Self::SCALE as u64
        )
    }
}

/// Share quantity. Always positive for a resting order; zero only as the
/// transient "fully consumed" state inside the matching loop.
///
/// Serialized as the raw integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// Zero quantity.
    pub const ZERO: Self = Self(0);

    /// Create a quantity from a raw share count.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw share count.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Check whether this quantity is zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Smaller of two quantities (fill size of a match).
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        assert!(
            self.0 >= rhs.0,
            "quantity underflow: {} - {}",
            self.0,
            rhs.0
        );
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_ticks_roundtrip() {
        let price = Price::from_ticks(10500);
        assert_eq!(price.ticks(), 10500);
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::from_ticks(10500).to_string(), "105.00");
        assert_eq!(Price::from_ticks(10005).to_string(), "100.05");
        assert_eq!(Price::from_ticks(-250).to_string(), "-2.50");
    }

    #[test]
    fn test_price_ordering() {
        assert!(Price::from_ticks(10100) > Price::from_ticks(10000));
        assert!(Price::from_ticks(-1) < Price::ZERO);
    }

    #[test]
    fn test_price_serialization() {
        let price = Price::from_ticks(10500);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "10500");

        let deserialized: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(price, deserialized);
    }

    #[test]
    fn test_quantity_min() {
        let a = Quantity::new(100);
        let b = Quantity::new(30);
        assert_eq!(a.min(b), b);
        assert_eq!(b.min(a), b);
    }

    #[test]
    fn test_quantity_arithmetic() {
        let mut q = Quantity::new(100);
        q -= Quantity::new(30);
        assert_eq!(q, Quantity::new(70));
        q += Quantity::new(5);
        assert_eq!(q.raw(), 75);
    }

    #[test]
    #[should_panic(expected = "quantity underflow")]
    fn test_quantity_underflow_panics() {
        let _ = Quantity::new(10) - Quantity::new(20);
    }

    #[test]
    fn test_quantity_serialization() {
        let qty = Quantity::new(150);
        let json = serde_json::to_string(&qty).unwrap();
        assert_eq!(json, "150");

        let deserialized: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(qty, deserialized);
    }
}
