//! Quote assembly.

use cost_model::{CostBreakdown, CostInputs};
use mesh_metrics::GeometryMetrics;
use serde::Serialize;

use crate::timestamp::Timestamp;

/// A complete quote: pricing inputs, the itemized breakdown, and the
/// geometry report when one was requested.
///
/// Assembled once per cost-calculation request, stamped with its
/// creation time, and immutable afterwards. Ownership is caller-held;
/// nothing in this crate persists quotes.
///
/// # Example
///
/// ```
/// use cost_model::{estimate_cost, CostInputs, Material};
/// use quote_engine::Quote;
///
/// let inputs = CostInputs {
///     material: Material::Steel,
///     thickness_mm: 10.0,
///     quantity: 1,
/// };
/// let breakdown = estimate_cost(&inputs).unwrap();
/// let quote = Quote::assemble(inputs, breakdown, None);
///
/// assert!(quote.metrics.is_none());
/// assert!((quote.breakdown.total_cost - 118.8).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    /// The pricing inputs the quote was computed from.
    pub inputs: CostInputs,

    /// Itemized cost breakdown.
    pub breakdown: CostBreakdown,

    /// Geometry report; absent when only a price estimate was
    /// requested.
    pub metrics: Option<GeometryMetrics>,

    /// Creation time.
    pub created_at: Timestamp,
}

impl Quote {
    /// Combine a breakdown with optional geometry metrics.
    ///
    /// The breakdown is required by construction; there is no further
    /// validation to do here.
    #[must_use]
    pub fn assemble(
        inputs: CostInputs,
        breakdown: CostBreakdown,
        metrics: Option<GeometryMetrics>,
    ) -> Self {
        Self {
            inputs,
            breakdown,
            metrics,
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cost_model::{estimate_cost, Material};
    use mesh_core::axis_aligned_box;
    use mesh_metrics::analyze_mesh;

    fn steel_inputs() -> CostInputs {
        CostInputs {
            material: Material::Steel,
            thickness_mm: 10.0,
            quantity: 2,
        }
    }

    #[test]
    fn assemble_without_metrics() {
        let inputs = steel_inputs();
        let breakdown = estimate_cost(&inputs).unwrap();
        let quote = Quote::assemble(inputs, breakdown, None);
        assert!(quote.metrics.is_none());
        assert!(quote.created_at.as_nanos() > 0);
    }

    #[test]
    fn assemble_with_metrics() {
        let inputs = steel_inputs();
        let breakdown = estimate_cost(&inputs).unwrap();
        let metrics = analyze_mesh(&axis_aligned_box(1.0, 2.0, 3.0));
        let quote = Quote::assemble(inputs, breakdown, Some(metrics));

        let m = quote.metrics.as_ref().unwrap();
        assert!((m.volume - 6.0).abs() < 1e-9);
        assert_eq!(m.face_count, 12);
    }

    #[test]
    fn quote_serializes_nested_records() {
        let inputs = steel_inputs();
        let breakdown = estimate_cost(&inputs).unwrap();
        let quote = Quote::assemble(inputs, breakdown, None);

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["inputs"]["material"], "steel");
        assert!(json["breakdown"]["totalCost"].is_number());
        assert!(json["metrics"].is_null());
    }
}
