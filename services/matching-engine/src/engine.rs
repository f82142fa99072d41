//! Matching engine core
//!
//! Owns the shared order ledger and serializes order intake plus matching
//! behind a single lock.

use parking_lot::Mutex;
use types::errors::SubmitError;
use types::ids::{InstrumentId, OrderIndex};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

use crate::book::ArrivalBook;
use crate::matching;

/// Engine limits.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of orders the ledger will record.
    pub max_orders: usize,
    /// Size of the instrument universe order generators draw from.
    /// A convention for drivers; submission does not range-check ids.
    pub max_instruments: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_orders: 10_000,
            max_instruments: 1024,
        }
    }
}

/// Result of submitting an order
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResult {
    /// Recorded with no fill; rests in the ledger
    Resting { index: OrderIndex },
    /// Some quantity filled; the remainder rests
    PartiallyFilled { index: OrderIndex, trades: Vec<Trade> },
    /// Completely filled on arrival
    Filled { index: OrderIndex, trades: Vec<Trade> },
}

impl SubmitResult {
    /// Arrival index assigned to the submitted order
    pub fn index(&self) -> OrderIndex {
        match self {
            SubmitResult::Resting { index }
            | SubmitResult::PartiallyFilled { index, .. }
            | SubmitResult::Filled { index, .. } => *index,
        }
    }

    /// Trades emitted by this submission, in fill order
    pub fn trades(&self) -> &[Trade] {
        match self {
            SubmitResult::Resting { .. } => &[],
            SubmitResult::PartiallyFilled { trades, .. }
            | SubmitResult::Filled { trades, .. } => trades,
        }
    }
}

/// Continuous matching engine over a shared arrival-ordered ledger.
///
/// `submit` is the only mutating entry point and takes `&self`, so one
/// engine can be shared across worker threads behind an `Arc`. Recording
/// the order, scanning for makers, and applying fills happen inside one
/// critical section; no concurrent submission can observe a maker with its
/// quantity half-updated, and trade order across threads is the lock's
/// serialization order.
pub struct MatchingEngine {
    ledger: Mutex<ArrivalBook>,
    config: EngineConfig,
}

impl MatchingEngine {
    /// Create an engine with the given limits
    pub fn new(config: EngineConfig) -> Self {
        Self {
            ledger: Mutex::new(ArrivalBook::new(config.max_orders)),
            config,
        }
    }

    /// Submit an order and match it against the resting ledger.
    ///
    /// Validation happens before the lock is taken: zero quantities and
    /// non-positive prices are rejected without touching the ledger.
    /// Instrument ids are accepted as-is; an id outside the configured
    /// universe simply never meets a counterparty from it. Once the ledger
    /// holds `max_orders` orders, every further submission is rejected with
    /// `CapacityExceeded`.
    pub fn submit(
        &self,
        side: Side,
        instrument: InstrumentId,
        quantity: Quantity,
        limit_price: Price,
    ) -> Result<SubmitResult, SubmitError> {
        if quantity.is_zero() {
            return Err(SubmitError::InvalidQuantity);
        }
        if !limit_price.is_positive() {
            return Err(SubmitError::InvalidPrice { price: limit_price });
        }

        let mut ledger = self.ledger.lock();

        let index = ledger
            .try_append(instrument, side, quantity, limit_price)
            .ok_or(SubmitError::CapacityExceeded {
                capacity: self.config.max_orders,
            })?;

        let trades = matching::run_pass(&mut ledger, index);
        let still_active = ledger.order(index).is_some_and(Order::is_active);

        if trades.is_empty() {
            Ok(SubmitResult::Resting { index })
        } else if still_active {
            Ok(SubmitResult::PartiallyFilled { index, trades })
        } else {
            Ok(SubmitResult::Filled { index, trades })
        }
    }

    /// Copy of one order's current state
    pub fn order(&self, index: OrderIndex) -> Option<Order> {
        self.ledger.lock().order(index).cloned()
    }

    /// Copy of the full ledger in arrival order
    pub fn snapshot(&self) -> Vec<Order> {
        self.ledger.lock().iter().cloned().collect()
    }

    /// Total orders recorded so far
    pub fn order_count(&self) -> usize {
        self.ledger.lock().len()
    }

    /// Orders still able to match
    pub fn active_order_count(&self) -> usize {
        self.ledger.lock().active_len()
    }

    /// The limits this engine was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> MatchingEngine {
        MatchingEngine::new(EngineConfig::default())
    }

    fn submit(
        engine: &MatchingEngine,
        side: Side,
        instrument: u32,
        quantity: u64,
        price: &str,
    ) -> Result<SubmitResult, SubmitError> {
        engine.submit(
            side,
            InstrumentId::new(instrument),
            Quantity::new(quantity),
            price.parse().unwrap(),
        )
    }

    #[test]
    fn test_first_order_rests() {
        let engine = engine();
        let result = submit(&engine, Side::BUY, 1, 100, "50.0").unwrap();

        assert!(matches!(result, SubmitResult::Resting { .. }));
        assert!(result.trades().is_empty());
        assert_eq!(engine.order_count(), 1);
        assert_eq!(engine.active_order_count(), 1);
    }

    #[test]
    fn test_sell_taker_fills_at_resting_buy_price() {
        let engine = engine();
        let buy = submit(&engine, Side::BUY, 1, 100, "50.0").unwrap().index();

        let result = submit(&engine, Side::SELL, 1, 60, "45.0").unwrap();

        match result {
            SubmitResult::Filled { index, trades } => {
                assert_eq!(trades.len(), 1);
                assert_eq!(trades[0].quantity, Quantity::new(60));
                assert_eq!(trades[0].price, "50.0".parse().unwrap());
                assert_eq!(trades[0].maker_index, buy);
                assert_eq!(trades[0].taker_index, index);
                assert_eq!(trades[0].side, Side::SELL);
            }
            other => panic!("expected Filled, got {other:?}"),
        }

        let maker = engine.order(buy).unwrap();
        assert_eq!(maker.quantity, Quantity::new(40));
        assert!(maker.is_active());
        assert_eq!(engine.active_order_count(), 1);
    }

    #[test]
    fn test_buy_taker_fills_at_resting_sell_price() {
        let engine = engine();
        submit(&engine, Side::SELL, 1, 60, "45.0").unwrap();

        let result = submit(&engine, Side::BUY, 1, 100, "50.0").unwrap();

        match result {
            SubmitResult::PartiallyFilled { trades, .. } => {
                assert_eq!(trades.len(), 1);
                assert_eq!(trades[0].quantity, Quantity::new(60));
                assert_eq!(trades[0].price, "45.0".parse().unwrap());
                assert_eq!(trades[0].side, Side::BUY);
            }
            other => panic!("expected PartiallyFilled, got {other:?}"),
        }

        assert_eq!(engine.active_order_count(), 1);
    }

    #[test]
    fn test_non_crossing_orders_rest_untouched() {
        let engine = engine();
        let sell = submit(&engine, Side::SELL, 2, 10, "30.0").unwrap().index();
        let result = submit(&engine, Side::BUY, 2, 10, "20.0").unwrap();

        assert!(matches!(result, SubmitResult::Resting { .. }));

        let sell_order = engine.order(sell).unwrap();
        let buy_order = engine.order(result.index()).unwrap();
        assert!(sell_order.is_active());
        assert!(buy_order.is_active());
        assert_eq!(sell_order.quantity, Quantity::new(10));
        assert_eq!(buy_order.quantity, Quantity::new(10));
    }

    #[test]
    fn test_taker_sweeps_multiple_makers_in_arrival_order() {
        let engine = engine();
        submit(&engine, Side::SELL, 3, 5, "40.0").unwrap();
        let second = submit(&engine, Side::SELL, 3, 5, "42.0").unwrap().index();

        let result = submit(&engine, Side::BUY, 3, 8, "100.0").unwrap();

        match result {
            SubmitResult::Filled { trades, .. } => {
                assert_eq!(trades.len(), 2);
                assert_eq!(trades[0].quantity, Quantity::new(5));
                assert_eq!(trades[1].quantity, Quantity::new(3));
            }
            other => panic!("expected Filled, got {other:?}"),
        }

        let remainder = engine.order(second).unwrap();
        assert_eq!(remainder.quantity, Quantity::new(2));
        assert!(remainder.is_active());
    }

    #[test]
    fn test_fifo_priority_beats_better_price() {
        let engine = engine();
        let older = submit(&engine, Side::SELL, 1, 10, "50.0").unwrap().index();
        let newer = submit(&engine, Side::SELL, 1, 10, "45.0").unwrap().index();

        let result = submit(&engine, Side::BUY, 1, 10, "55.0").unwrap();

        let trades = result.trades();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].maker_index, older);
        assert_eq!(trades[0].price, "50.0".parse().unwrap());
        assert_eq!(engine.order(newer).unwrap().quantity, Quantity::new(10));
    }

    #[test]
    fn test_capacity_ceiling_rejects_further_orders() {
        let engine = MatchingEngine::new(EngineConfig {
            max_orders: 3,
            ..Default::default()
        });

        for instrument in 0..3 {
            submit(&engine, Side::BUY, instrument, 1, "10.0").unwrap();
        }

        let rejected = submit(&engine, Side::BUY, 3, 1, "10.0");
        assert_eq!(rejected, Err(SubmitError::CapacityExceeded { capacity: 3 }));
        assert_eq!(engine.order_count(), 3);
    }

    #[test]
    fn test_zero_quantity_rejected_before_recording() {
        let engine = engine();
        let rejected = submit(&engine, Side::BUY, 1, 0, "10.0");

        assert_eq!(rejected, Err(SubmitError::InvalidQuantity));
        assert_eq!(engine.order_count(), 0);
    }

    #[test]
    fn test_non_positive_price_rejected_before_recording() {
        let engine = engine();

        let zero = submit(&engine, Side::SELL, 1, 5, "0");
        assert!(matches!(zero, Err(SubmitError::InvalidPrice { .. })));

        let negative = submit(&engine, Side::SELL, 1, 5, "-4.5");
        assert!(matches!(negative, Err(SubmitError::InvalidPrice { .. })));

        assert_eq!(engine.order_count(), 0);
    }

    #[test]
    fn test_instrument_outside_universe_is_accepted() {
        let engine = MatchingEngine::new(EngineConfig {
            max_instruments: 8,
            ..Default::default()
        });

        let result = submit(&engine, Side::BUY, 9_999, 10, "50.0").unwrap();
        assert!(matches!(result, SubmitResult::Resting { .. }));

        // An in-universe order on a different id never touches it.
        submit(&engine, Side::SELL, 0, 10, "50.0").unwrap();
        assert_eq!(engine.active_order_count(), 2);
    }

    #[test]
    fn test_snapshot_reflects_fills() {
        let engine = engine();
        submit(&engine, Side::BUY, 1, 10, "50.0").unwrap();
        submit(&engine, Side::SELL, 1, 10, "50.0").unwrap();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.iter().all(|order| order.check_invariant()));
        assert!(snapshot.iter().all(|order| !order.is_active()));
        assert!(snapshot.iter().all(|order| order.quantity.is_zero()));
    }
}
