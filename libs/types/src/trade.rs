//! Trade event type

use crate::ids::{InstrumentId, OrderIndex};
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One fill between a resting maker order and an incoming taker order.
///
/// Emitted in scan order within a matching pass; across submissions, trade
/// order is the engine's serialization order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub instrument: InstrumentId,

    // Order references
    pub maker_index: OrderIndex,
    pub taker_index: OrderIndex,

    /// Aggressor direction (the taker's side)
    pub side: Side,
    /// Execution price: always the maker's limit price
    pub price: Price,
    /// Filled quantity, always positive
    pub quantity: Quantity,
}

impl Trade {
    /// Notional value of the fill (price × quantity)
    pub fn trade_value(&self) -> Decimal {
        self.quantity.as_decimal() * self.price.as_decimal()
    }
}
