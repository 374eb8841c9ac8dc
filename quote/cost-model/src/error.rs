//! Error types for cost estimation.

use thiserror::Error;

/// Result type for cost estimation.
pub type CostResult<T> = Result<T, CostError>;

/// Per-field validation failures for cost inputs.
///
/// Reported without side effects; the caller resubmits corrected
/// inputs rather than retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostError {
    /// Thickness must be a positive finite number of millimeters.
    #[error("invalid thickness: {value} (must be positive and finite)")]
    InvalidThickness {
        /// The rejected value.
        value: f64,
    },

    /// Quantity must be at least 1.
    #[error("invalid quantity: {value} (must be at least 1)")]
    InvalidQuantity {
        /// The rejected value.
        value: u64,
    },
}
