//! Random order flow
//!
//! Generates random orders with a deterministic seeded RNG, so a run can be
//! reproduced from its seed alone.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::ids::InstrumentId;
use types::numeric::{Price, Quantity};
use types::order::Side;

/// Configuration for random order generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Number of instrument ids to draw from, starting at 0
    pub instruments: u32,
    /// Minimum order size in shares
    pub min_quantity: u64,
    /// Maximum order size in shares
    pub max_quantity: u64,
    /// Lower bound of the limit price band
    pub min_price: f64,
    /// Upper bound of the limit price band
    pub max_price: f64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            instruments: 1024,
            min_quantity: 1,
            max_quantity: 100,
            min_price: 1.0,
            max_price: 1000.0,
        }
    }
}

/// Parameters of one generated order.
#[derive(Debug, Clone)]
pub struct FlowOrder {
    pub side: Side,
    pub instrument: InstrumentId,
    pub quantity: Quantity,
    pub limit_price: Price,
}

/// Deterministic random order generator.
pub struct OrderFlow {
    pub config: FlowConfig,
    pub orders_generated: usize,
    rng: ChaCha8Rng,
}

impl OrderFlow {
    /// Create a generator with a deterministic seed.
    pub fn new(config: FlowConfig, seed: u64) -> Self {
        Self {
            config,
            orders_generated: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw the next random order.
    pub fn next_order(&mut self) -> FlowOrder {
        let side = if self.rng.gen_bool(0.5) {
            Side::BUY
        } else {
            Side::SELL
        };

        let universe = self.config.instruments.max(1);
        let instrument = InstrumentId::new(self.rng.gen_range(0..universe));

        let quantity = Quantity::new(
            self.rng
                .gen_range(self.config.min_quantity..=self.config.max_quantity),
        );

        let price_f: f64 = self.rng.gen_range(self.config.min_price..=self.config.max_price);
        let price = Decimal::from_f64(price_f)
            .unwrap_or(Decimal::ONE)
            .round_dp(2);
        let price = if price > Decimal::ZERO { price } else { Decimal::ONE };

        self.orders_generated += 1;
        FlowOrder {
            side,
            instrument,
            quantity,
            limit_price: Price::new(price),
        }
    }
}
