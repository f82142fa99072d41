//! Multi-worker submission driver
//!
//! Spawns worker threads that share one engine and submit independent
//! random flows. Each worker derives its own seed from the base seed, so a
//! single-worker run is exactly reproducible; with several workers the
//! engine's lock decides the interleaving.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use matching_engine::MatchingEngine;
use tracing::{debug, warn};

use crate::flow::{FlowConfig, OrderFlow};
use crate::metrics::RunMetrics;

/// Configuration for one driver run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Number of submitting worker threads
    pub workers: usize,
    /// Orders each worker submits
    pub orders_per_worker: usize,
    /// Base RNG seed; worker `n` runs its flow from `seed + n`
    pub seed: u64,
    /// Optional pause between submissions
    pub throttle: Option<Duration>,
    /// Order generation parameters
    pub flow: FlowConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            orders_per_worker: 2_500,
            seed: 42,
            throttle: None,
            flow: FlowConfig::default(),
        }
    }
}

/// Drive the engine with random flow and aggregate per-worker totals.
pub fn run(engine: Arc<MatchingEngine>, config: RunnerConfig) -> RunMetrics {
    let handles: Vec<_> = (0..config.workers)
        .map(|worker| {
            let engine = Arc::clone(&engine);
            let flow = config.flow.clone();
            let seed = config.seed + worker as u64;
            let orders = config.orders_per_worker;
            let throttle = config.throttle;

            thread::spawn(move || worker_loop(&engine, worker, flow, seed, orders, throttle))
        })
        .collect();

    let mut totals = RunMetrics::new();
    for (worker, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(metrics) => totals.merge(metrics),
            Err(_) => warn!(worker, "submission worker panicked; totals exclude it"),
        }
    }
    totals
}

fn worker_loop(
    engine: &MatchingEngine,
    worker: usize,
    flow: FlowConfig,
    seed: u64,
    orders: usize,
    throttle: Option<Duration>,
) -> RunMetrics {
    let mut flow = OrderFlow::new(flow, seed);
    let mut metrics = RunMetrics::new();

    for _ in 0..orders {
        let order = flow.next_order();

        match engine.submit(order.side, order.instrument, order.quantity, order.limit_price) {
            Ok(result) => {
                metrics.record_submission(order.instrument, order.quantity);
                for trade in result.trades() {
                    debug!(
                        worker,
                        instrument = %trade.instrument,
                        quantity = %trade.quantity,
                        price = %trade.price,
                        side = ?trade.side,
                        "matched"
                    );
                    metrics.record_trade(trade);
                }
            }
            Err(error) => {
                metrics.record_rejection();
                debug!(worker, %error, "order rejected");
            }
        }

        if let Some(pause) = throttle {
            thread::sleep(pause);
        }
    }

    metrics
}
