//! Order-Flow Simulation Driver
//!
//! Feeds the continuous matching engine with deterministic random order
//! flow from multiple worker threads and aggregates what happened.
//!
//! # Modules
//! - `flow` — Seeded random order generation
//! - `runner` — Multi-worker submission driver
//! - `metrics` — Run counters and per-instrument activity

pub mod flow;
pub mod metrics;
pub mod runner;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
