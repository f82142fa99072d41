//! Matching logic module
//!
//! Implements the arrival-order matching pass: resting makers are
//! considered strictly in the order they arrived, not by price.

pub mod crossing;

pub use crossing::crosses;

use types::ids::OrderIndex;
use types::trade::Trade;

use crate::book::ArrivalBook;

/// Match a newly recorded taker against the resting ledger.
///
/// Walks makers in ascending arrival order exactly once. A maker is
/// eligible when it is a different order, still active, on the same
/// instrument, on the opposite side, and price-compatible with the taker.
/// Each eligible maker fills `min(taker remaining, maker remaining)` at the
/// maker's limit price; a fully filled taker ends the scan immediately.
///
/// Eligibility is strictly FIFO: an older price-compatible maker fills
/// before a newer one with a better price. Callers must hold whatever lock
/// guards the ledger for the full pass, since both sides of every fill are
/// mutated in place.
pub fn run_pass(book: &mut ArrivalBook, taker_index: OrderIndex) -> Vec<Trade> {
    let mut trades = Vec::new();

    // A taker recorded with nothing left to fill matches nothing.
    let (instrument, taker_side, taker_price) = match book.order(taker_index) {
        Some(taker) if taker.is_active() => (taker.instrument, taker.side, taker.limit_price),
        _ => return trades,
    };

    for position in 0..book.len() {
        let maker_index = OrderIndex::new(position);
        if maker_index == taker_index {
            continue;
        }

        let eligible = book.order(maker_index).is_some_and(|maker| {
            maker.is_active()
                && maker.instrument == instrument
                && maker.side == taker_side.opposite()
                && crossing::crosses(taker_side, taker_price, maker.limit_price)
        });
        if !eligible {
            continue;
        }

        let (taker, maker) = book.pair_mut(taker_index, maker_index);
        let fill = taker.quantity.min(maker.quantity);
        let price = maker.limit_price;

        taker.fill(fill);
        maker.fill(fill);

        trades.push(Trade {
            instrument,
            maker_index,
            taker_index,
            side: taker_side,
            price,
            quantity: fill,
        });

        if !taker.is_active() {
            break;
        }
    }

    trades
}
