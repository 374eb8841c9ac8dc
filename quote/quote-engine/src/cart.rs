//! In-memory cart service.
//!
//! An explicit service object owning the cart entries. Callers hold a
//! reference (or a handle of their choosing) instead of reaching into
//! ambient process-wide state; one service per customer session.

use serde::Serialize;

use crate::quote::Quote;
use crate::timestamp::Timestamp;

/// One priced part in the cart.
#[derive(Debug, Clone, Serialize)]
pub struct CartItem {
    /// Identifier unique within this cart.
    pub id: u64,
    /// Display label, usually the uploaded file name.
    pub label: String,
    /// Total order cost from the quote.
    pub total_cost: f64,
    /// When the item was added.
    pub added_at: Timestamp,
}

/// Cart entries for one session.
///
/// # Example
///
/// ```
/// use quote_engine::CartService;
///
/// let mut cart = CartService::new();
/// let id = cart.add("bracket.stl", 118.8);
/// cart.add("plate.stl", 50.0);
///
/// assert_eq!(cart.len(), 2);
/// assert!((cart.total() - 168.8).abs() < 1e-9);
///
/// assert!(cart.remove(id));
/// assert_eq!(cart.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CartService {
    items: Vec<CartItem>,
    next_id: u64,
}

impl CartService {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Add an entry, returning its id.
    pub fn add(&mut self, label: impl Into<String>, total_cost: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(CartItem {
            id,
            label: label.into(),
            total_cost,
            added_at: Timestamp::now(),
        });
        id
    }

    /// Add an entry priced by a quote.
    pub fn add_quote(&mut self, label: impl Into<String>, quote: &Quote) -> u64 {
        self.add(label, quote.breakdown.total_cost)
    }

    /// Remove an entry by id. Returns whether it existed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all entry costs.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.total_cost).sum()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cost_model::{estimate_cost, CostInputs, Material};

    #[test]
    fn ids_are_unique_and_stable() {
        let mut cart = CartService::new();
        let a = cart.add("a.stl", 1.0);
        let b = cart.add("b.stl", 2.0);
        assert_ne!(a, b);
        assert!(cart.remove(a));
        let c = cart.add("c.stl", 3.0);
        assert_ne!(b, c);
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let mut cart = CartService::new();
        cart.add("a.stl", 1.0);
        assert!(!cart.remove(999));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn total_sums_entries() {
        let mut cart = CartService::new();
        cart.add("a.stl", 10.0);
        cart.add("b.stl", 2.5);
        assert!((cart.total() - 12.5).abs() < 1e-12);
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().abs() < f64::EPSILON);
    }

    #[test]
    fn add_quote_uses_total_cost() {
        let inputs = CostInputs {
            material: Material::Steel,
            thickness_mm: 10.0,
            quantity: 1,
        };
        let breakdown = estimate_cost(&inputs).unwrap();
        let quote = Quote::assemble(inputs, breakdown, None);

        let mut cart = CartService::new();
        cart.add_quote("bracket.stl", &quote);
        assert!((cart.total() - 118.8).abs() < 1e-9);
        assert_eq!(cart.items().next().unwrap().label, "bracket.stl");
    }
}
