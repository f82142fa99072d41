//! Order lifecycle types

use crate::ids::{InstrumentId, OrderIndex};
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

/// A resting or incoming order.
///
/// `index`, `instrument`, `side`, and `limit_price` never change after
/// creation. `quantity` is the remaining unfilled amount and only
/// decreases; once it reaches zero the order flips to inactive and stays
/// that way. There is no cancellation path; deactivation by full fill is
/// the only state transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub index: OrderIndex,
    pub instrument: InstrumentId,
    pub side: Side,
    pub limit_price: Price,
    pub quantity: Quantity,
    pub active: bool,
}

impl Order {
    /// Create a new order at the given arrival index
    pub fn new(
        index: OrderIndex,
        instrument: InstrumentId,
        side: Side,
        quantity: Quantity,
        limit_price: Price,
    ) -> Self {
        Self {
            index,
            instrument,
            side,
            limit_price,
            quantity,
            active: !quantity.is_zero(),
        }
    }

    /// Remaining quantity is positive and the order can still match
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Apply a fill, reducing the remaining quantity in place.
    ///
    /// Reaching zero deactivates the order permanently.
    ///
    /// # Panics
    /// Panics if the fill exceeds the remaining quantity.
    pub fn fill(&mut self, fill_quantity: Quantity) {
        assert!(
            fill_quantity <= self.quantity,
            "fill exceeds remaining quantity"
        );

        self.quantity = self
            .quantity
            .checked_sub(fill_quantity)
            .unwrap_or(Quantity::ZERO);

        if self.quantity.is_zero() {
            self.active = false;
        }

        debug_assert!(self.check_invariant(), "invariant violated after fill");
    }

    /// Check the activity invariant: `active == (quantity > 0)`
    pub fn check_invariant(&self) -> bool {
        self.active == !self.quantity.is_zero()
    }
}
