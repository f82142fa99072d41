//! Matching Engine Service
//!
//! Continuous order matching over a shared arrival-ordered ledger. Every
//! submission is matched immediately against all resting opposite-side
//! orders on the same instrument, strictly in arrival order (deliberately
//! FIFO rather than price-time priority), before the next submission runs.
//!
//! **Key Invariants:**
//! - FIFO maker priority by arrival order
//! - Execution price is always the maker's limit price
//! - Deterministic matching (same inputs → same outputs)
//! - No self-trades
//! - Conservation of quantity across every fill

pub mod book;
pub mod engine;
pub mod matching;

pub use engine::{EngineConfig, MatchingEngine, SubmitResult};
