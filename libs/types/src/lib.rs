//! Types library for the continuous matching engine
//!
//! This library provides all core type definitions shared by the engine and
//! its drivers, ensuring type safety and deterministic behavior.
//!
//! # Version
//! v1.0.0
//!
//! # Modules
//! - `ids`: Unique identifiers (InstrumentId, OrderIndex)
//! - `numeric`: Fixed-point decimal types (Price, Quantity)
//! - `order`: Order lifecycle types
//! - `trade`: Trade execution types
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trade::*;
}
