//! Run metrics for the simulation driver
//!
//! Workers count locally and merge at the end, so no counter needs its own
//! synchronization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use types::ids::InstrumentId;
use types::numeric::Quantity;
use types::trade::Trade;

/// Activity totals for one instrument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstrumentActivity {
    /// Orders accepted on this instrument
    pub orders: u64,
    /// Trades this instrument appeared in
    pub trades: u64,
    /// Shares traded
    pub volume: u64,
}

/// Aggregated totals for one driver run.
///
/// Per-instrument activity sits in a `BTreeMap` so reports iterate in
/// instrument order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Orders the engine accepted
    pub orders_submitted: u64,
    /// Shares across all accepted orders
    pub quantity_submitted: u64,
    /// Orders the engine rejected
    pub orders_rejected: u64,
    /// Trades emitted
    pub trades: u64,
    /// Shares traded
    pub volume: u64,
    /// Value traded (price × quantity summed over trades)
    pub notional: Decimal,
    /// Per-instrument breakdown
    pub per_instrument: BTreeMap<InstrumentId, InstrumentActivity>,
}

impl RunMetrics {
    /// Create empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one accepted submission.
    pub fn record_submission(&mut self, instrument: InstrumentId, quantity: Quantity) {
        self.orders_submitted += 1;
        self.quantity_submitted += quantity.get();
        self.per_instrument.entry(instrument).or_default().orders += 1;
    }

    /// Record one rejected submission.
    pub fn record_rejection(&mut self) {
        self.orders_rejected += 1;
    }

    /// Record one emitted trade.
    pub fn record_trade(&mut self, trade: &Trade) {
        self.trades += 1;
        self.volume += trade.quantity.get();
        self.notional += trade.trade_value();

        let activity = self.per_instrument.entry(trade.instrument).or_default();
        activity.trades += 1;
        activity.volume += trade.quantity.get();
    }

    /// Fold another worker's totals into this one.
    pub fn merge(&mut self, other: RunMetrics) {
        self.orders_submitted += other.orders_submitted;
        self.quantity_submitted += other.quantity_submitted;
        self.orders_rejected += other.orders_rejected;
        self.trades += other.trades;
        self.volume += other.volume;
        self.notional += other.notional;

        for (instrument, activity) in other.per_instrument {
            let mine = self.per_instrument.entry(instrument).or_default();
            mine.orders += activity.orders;
            mine.trades += activity.trades;
            mine.volume += activity.volume;
        }
    }

    /// Build a summary string.
    pub fn summary(&self) -> String {
        format!(
            "Orders: {} (rejected: {}) | Trades: {} | Volume: {} shares | Notional: {}",
            self.orders_submitted, self.orders_rejected, self.trades, self.volume, self.notional,
        )
    }
}
