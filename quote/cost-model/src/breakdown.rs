//! Cost inputs, validation and the itemized breakdown.

use serde::{Deserialize, Serialize};

use crate::error::{CostError, CostResult};
use crate::material::Material;

/// Fixed base cost, in shop currency units.
pub const BASE_COST: f64 = 100.0;

/// Discount multiplier floor: never more than 20% off.
const DISCOUNT_FLOOR: f64 = 0.8;

/// Per-unit discount rate per ordered part.
const DISCOUNT_RATE: f64 = 0.01;

/// User-chosen pricing inputs.
///
/// Deserializes from the wire record
/// `{"material": ..., "thickness": ..., "quantity": ...}`.
///
/// # Example
///
/// ```
/// use cost_model::{CostInputs, Material};
///
/// let inputs: CostInputs =
///     serde_json::from_str(r#"{"material":"steel","thickness":5.0,"quantity":3}"#).unwrap();
/// assert_eq!(inputs.material, Material::Steel);
/// assert_eq!(inputs.quantity, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostInputs {
    /// Part material; unknown names price at the neutral multiplier.
    pub material: Material,

    /// Sheet thickness in millimeters. Must be positive and finite.
    #[serde(rename = "thickness")]
    pub thickness_mm: f64,

    /// Number of parts ordered. Must be at least 1.
    pub quantity: u64,
}

impl CostInputs {
    /// Validate thickness and quantity.
    ///
    /// # Errors
    ///
    /// [`CostError::InvalidThickness`] unless thickness is positive
    /// and finite; [`CostError::InvalidQuantity`] unless quantity ≥ 1.
    pub fn validate(&self) -> CostResult<()> {
        if !(self.thickness_mm.is_finite() && self.thickness_mm > 0.0) {
            return Err(CostError::InvalidThickness {
                value: self.thickness_mm,
            });
        }
        if self.quantity == 0 {
            return Err(CostError::InvalidQuantity {
                value: self.quantity,
            });
        }
        Ok(())
    }
}

/// Itemized cost breakdown.
///
/// Serializes camelCase to match the quote wire record:
/// `{baseCost, materialCost, thicknessCost, quantityDiscount, totalCost}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Fixed base cost.
    pub base_cost: f64,
    /// Base cost scaled by the material multiplier.
    pub material_cost: f64,
    /// Base cost scaled by thickness / 10.
    pub thickness_cost: f64,
    /// Quantity discount multiplier, in `[0.8, 1.0)`.
    pub quantity_discount: f64,
    /// Final price for the whole order.
    pub total_cost: f64,
}

/// Estimate manufacturing cost from validated inputs.
///
/// Pure and deterministic; no side effects on failure.
///
/// # Errors
///
/// Whatever [`CostInputs::validate`] reports.
///
/// # Example
///
/// ```
/// use cost_model::{estimate_cost, CostInputs, Material};
///
/// // Floor: at 50 parts the discount has long since bottomed out at 0.8
/// let inputs = CostInputs {
///     material: Material::Aluminum,
///     thickness_mm: 10.0,
///     quantity: 50,
/// };
/// let b = estimate_cost(&inputs).unwrap();
/// assert!((b.quantity_discount - 0.8).abs() < 1e-12);
/// ```
pub fn estimate_cost(inputs: &CostInputs) -> CostResult<CostBreakdown> {
    inputs.validate()?;

    let multiplier = inputs.material.multiplier();
    let thickness_factor = inputs.thickness_mm / 10.0;
    #[allow(clippy::cast_precision_loss)]
    let quantity = inputs.quantity as f64;
    let discount = (1.0 - quantity * DISCOUNT_RATE).max(DISCOUNT_FLOOR);

    Ok(CostBreakdown {
        base_cost: BASE_COST,
        material_cost: BASE_COST * multiplier,
        thickness_cost: BASE_COST * thickness_factor,
        quantity_discount: discount,
        total_cost: BASE_COST * multiplier * thickness_factor * discount * quantity,
    })
}
