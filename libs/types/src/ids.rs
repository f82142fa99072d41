//! Identifier types for engine entities
//!
//! The instrument universe is a fixed integer range and an order's identity
//! is its arrival position in the ledger, so both identifiers are plain
//! integer newtypes rather than generated ids.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a tradable instrument.
///
/// The configured universe is `[0, max_instruments)`, but that range is a
/// convention for order generators, not a bound the engine enforces: an
/// out-of-range id is accepted and simply never meets a counterparty from
/// the configured universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(u32);

impl InstrumentId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw instrument index
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for InstrumentId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// An order's position in arrival order.
///
/// Assigned exactly once when the engine records the order. Orders are
/// never removed from the ledger, so the index is stable for the process
/// lifetime and doubles as the order's identity. Indexes compare in
/// arrival order, which is also matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderIndex(usize);

impl OrderIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw ledger position
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Display for OrderIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instrument_id_accessors() {
        let id = InstrumentId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(InstrumentId::from(42u32), id);
    }

    #[test]
    fn test_instrument_id_serialization() {
        let id = InstrumentId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");

        let deserialized: InstrumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_order_index_arrival_ordering() {
        let earlier = OrderIndex::new(3);
        let later = OrderIndex::new(11);
        assert!(earlier < later, "smaller index means earlier arrival");
        assert_eq!(earlier.as_usize(), 3);
    }

    #[test]
    fn test_order_index_serialization() {
        let index = OrderIndex::new(128);
        let json = serde_json::to_string(&index).unwrap();
        assert_eq!(json, "128");

        let deserialized: OrderIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(index, deserialized);
    }
}
