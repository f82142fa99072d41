//! Crossing detection logic
//!
//! Determines when an incoming taker and a resting maker are
//! price-compatible.

use types::numeric::Price;
use types::order::Side;

/// Check if a taker's limit price crosses a resting maker's limit price.
///
/// A buying taker crosses a sell maker when it bids at least the ask; a
/// selling taker crosses a buy maker when it asks at most the bid. The
/// execution price is decided elsewhere and is always the maker's limit.
pub fn crosses(taker_side: Side, taker_price: Price, maker_price: Price) -> bool {
    match taker_side {
        Side::BUY => taker_price >= maker_price,
        Side::SELL => taker_price <= maker_price,
    }
}
