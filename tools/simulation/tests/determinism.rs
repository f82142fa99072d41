//! End-to-end driver runs
//!
//! A single-worker run is a pure function of its seed, so repeating one must
//! reproduce the same trades and the same final ledger. Multi-worker runs
//! are interleaving-dependent but must still conserve quantity.

use std::sync::Arc;

use matching_engine::{EngineConfig, MatchingEngine};
use simulation::flow::FlowConfig;
use simulation::metrics::RunMetrics;
use simulation::runner::{run, RunnerConfig};
use types::order::Order;

fn narrow_flow() -> FlowConfig {
    FlowConfig {
        instruments: 8,
        min_quantity: 1,
        max_quantity: 100,
        min_price: 10.0,
        max_price: 20.0,
    }
}

fn single_worker_run(seed: u64) -> (RunMetrics, Vec<Order>) {
    let engine = Arc::new(MatchingEngine::new(EngineConfig::default()));
    let config = RunnerConfig {
        workers: 1,
        orders_per_worker: 500,
        seed,
        throttle: None,
        flow: narrow_flow(),
    };

    let metrics = run(Arc::clone(&engine), config);
    (metrics, engine.snapshot())
}

#[test]
fn test_same_seed_reproduces_the_run() {
    let (metrics_a, ledger_a) = single_worker_run(7);
    let (metrics_b, ledger_b) = single_worker_run(7);

    assert_eq!(ledger_a, ledger_b, "same seed must rebuild the same ledger");
    assert_eq!(metrics_a, metrics_b);
    assert!(metrics_a.trades > 0, "a narrow band must cross sometimes");
}

#[test]
fn test_different_seeds_diverge() {
    let (_, ledger_a) = single_worker_run(1);
    let (_, ledger_b) = single_worker_run(2);

    assert_ne!(ledger_a, ledger_b);
}

#[test]
fn test_multi_worker_run_conserves_quantity() {
    let engine = Arc::new(MatchingEngine::new(EngineConfig::default()));
    let config = RunnerConfig {
        workers: 4,
        orders_per_worker: 1_000,
        seed: 42,
        throttle: None,
        flow: narrow_flow(),
    };

    let metrics = run(Arc::clone(&engine), config);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.len(), 4_000);
    assert!(snapshot.iter().all(|order| order.check_invariant()));

    let remaining: u64 = snapshot.iter().map(|order| order.quantity.get()).sum();
    assert_eq!(
        metrics.quantity_submitted - remaining,
        2 * metrics.volume,
        "every traded share must leave one taker and one maker"
    );

    assert_eq!(metrics.orders_submitted as usize, engine.order_count());
    assert_eq!(metrics.orders_rejected, 0);

    let per_instrument_volume: u64 = metrics
        .per_instrument
        .values()
        .map(|activity| activity.volume)
        .sum();
    assert_eq!(per_instrument_volume, metrics.volume);
}

#[test]
fn test_capacity_rejections_under_multiple_workers() {
    let engine = Arc::new(MatchingEngine::new(EngineConfig {
        max_orders: 100,
        ..Default::default()
    }));
    let config = RunnerConfig {
        workers: 2,
        orders_per_worker: 100,
        seed: 11,
        throttle: None,
        flow: narrow_flow(),
    };

    let metrics = run(Arc::clone(&engine), config);

    assert_eq!(metrics.orders_submitted, 100);
    assert_eq!(metrics.orders_rejected, 100);
    assert_eq!(engine.order_count(), 100);
}
