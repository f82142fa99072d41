//! Error types for order submission

use crate::numeric::Price;
use thiserror::Error;

/// Reasons an order is rejected before it reaches the ledger.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The ledger already holds the configured maximum number of orders.
    #[error("order ledger at capacity: {capacity} orders recorded")]
    CapacityExceeded { capacity: usize },

    /// Zero-quantity orders are rejected at the boundary.
    #[error("order quantity must be positive")]
    InvalidQuantity,

    /// Non-positive limit prices are rejected at the boundary.
    #[error("limit price must be positive, got {price}")]
    InvalidPrice { price: Price },
}
