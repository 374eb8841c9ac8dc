//! Parametric cost model for PartQuote.
//!
//! Converts user-chosen material, sheet thickness and quantity into an
//! itemized [`CostBreakdown`]. The model is a deterministic pure
//! function of its inputs; geometry metrics ride alongside in the
//! quote but do not feed the current formula.
//!
//! # Formula
//!
//! With base cost 100:
//!
//! ```text
//! materialCost     = base * materialMultiplier       (steel 1.2, else 1.0)
//! thicknessCost    = base * thickness / 10
//! quantityDiscount = max(0.8, 1 - quantity * 0.01)
//! totalCost        = base * multiplier * thickness/10 * discount * quantity
//! ```
//!
//! # Example
//!
//! ```
//! use cost_model::{estimate_cost, CostInputs, Material};
//!
//! let inputs = CostInputs {
//!     material: Material::Steel,
//!     thickness_mm: 10.0,
//!     quantity: 1,
//! };
//! let breakdown = estimate_cost(&inputs).unwrap();
//! assert!((breakdown.total_cost - 118.8).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod breakdown;
mod error;
mod material;

pub use breakdown::{estimate_cost, CostBreakdown, CostInputs, BASE_COST};
pub use error::{CostError, CostResult};
pub use material::Material;
