//! Simulation driver binary
//!
//! Builds a shared engine, runs the multi-worker driver against it, and
//! logs the aggregate outcome.

use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use matching_engine::{EngineConfig, MatchingEngine};
use simulation::flow::FlowConfig;
use simulation::runner::{self, RunnerConfig};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "simulation")]
#[command(about = "Random order-flow driver for the continuous matching engine", long_about = None)]
#[command(version)]
struct Args {
    /// Number of submitting worker threads
    #[arg(long, default_value_t = 4)]
    workers: usize,

    /// Orders each worker submits
    #[arg(long, default_value_t = 2500)]
    orders: usize,

    /// Base RNG seed (worker n runs from seed + n)
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Pause between submissions, in milliseconds
    #[arg(long)]
    throttle_ms: Option<u64>,

    /// Instrument universe size
    #[arg(long, default_value_t = 1024)]
    instruments: u32,

    /// Order ledger capacity
    #[arg(long, default_value_t = 10_000)]
    max_orders: usize,

    /// Print full metrics as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let engine = Arc::new(MatchingEngine::new(EngineConfig {
        max_orders: args.max_orders,
        max_instruments: args.instruments,
    }));

    let config = RunnerConfig {
        workers: args.workers,
        orders_per_worker: args.orders,
        seed: args.seed,
        throttle: args.throttle_ms.map(Duration::from_millis),
        flow: FlowConfig {
            instruments: args.instruments,
            ..Default::default()
        },
    };

    info!(
        workers = config.workers,
        orders_per_worker = config.orders_per_worker,
        seed = config.seed,
        max_orders = args.max_orders,
        instruments = args.instruments,
        "starting simulation"
    );

    let started = Instant::now();
    let metrics = runner::run(Arc::clone(&engine), config);
    let elapsed = started.elapsed();

    info!(
        orders = metrics.orders_submitted,
        rejected = metrics.orders_rejected,
        trades = metrics.trades,
        volume = metrics.volume,
        notional = %metrics.notional,
        recorded = engine.order_count(),
        still_active = engine.active_order_count(),
        elapsed_ms = elapsed.as_millis() as u64,
        "simulation complete"
    );

    if args.json {
        match serde_json::to_string_pretty(&metrics) {
            Ok(json) => println!("{json}"),
            Err(err) => error!(%err, "failed to serialize metrics"),
        }
    }
}
