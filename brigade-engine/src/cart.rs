//! Cart Aggregator
//!
//! Maintains the in-progress line-item collection for one order draft.
//! All operations are total functions over the in-memory collection - there
//! are no failure modes. The contract with the Pricing Engine is that every
//! mutation is followed by a totals recomputation in the caller; [`Cart::totals`]
//! is the hook for that.

use shared::order::{CartLine, Discount, OrderTotals};
use tracing::debug;

use crate::config::EngineConfig;
use crate::pricing;

/// Canonical line identity within one cart
///
/// Lines are dedup-keyed by item *name*. The legacy flows disagreed on
/// whether the key was the item id or the name; this engine fixes the name
/// as the single canonical key, and the strategy never varies within a cart
/// instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey(String);

impl LineKey {
    pub fn of(line: &CartLine) -> Self {
        Self::from_name(&line.name)
    }

    pub fn from_name(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ordered line-item collection for one order draft
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    fn position(&self, key: &LineKey) -> Option<usize> {
        self.lines.iter().position(|l| l.name == key.as_str())
    }

    /// Add one unit of an item
    ///
    /// If a line with the same key exists its quantity is incremented by 1;
    /// otherwise a new line is appended with quantity 1, carrying over the
    /// item's default special-instruction text.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        unit_price: f64,
        default_instructions: Option<String>,
    ) {
        let name = name.into();
        let key = LineKey::from_name(&name);

        match self.position(&key) {
            Some(idx) => {
                self.lines[idx].quantity += 1;
            }
            None => {
                let mut line = CartLine::new(name, unit_price, 1);
                line.special_instructions = default_instructions;
                self.lines.push(line);
            }
        }
    }

    /// Replace a line's quantity
    ///
    /// A quantity of zero or less behaves as [`Cart::remove_item`]; a
    /// quantity is never stored as 0 or negative.
    pub fn set_quantity(&mut self, key: &LineKey, quantity: i32) {
        if quantity <= 0 {
            self.remove_item(key);
            return;
        }
        if let Some(idx) = self.position(key) {
            self.lines[idx].quantity = quantity;
        }
    }

    /// Delete a line; no-op when absent
    pub fn remove_item(&mut self, key: &LineKey) {
        if let Some(idx) = self.position(key) {
            self.lines.remove(idx);
        } else {
            debug!(key = key.as_str(), "remove_item on absent line, ignoring");
        }
    }

    /// Set or replace the special instructions on an existing line
    pub fn set_instructions(&mut self, key: &LineKey, instructions: Option<String>) {
        if let Some(idx) = self.position(key) {
            self.lines[idx].special_instructions = instructions;
        }
    }

    /// Drop all lines
    pub fn reset(&mut self) {
        self.lines.clear();
    }

    /// Recompute totals through the Pricing Engine
    pub fn totals(&self, discount: Option<&Discount>, config: &EngineConfig) -> OrderTotals {
        pricing::compute_totals(&self.lines, discount, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_twice_equals_set_quantity_two() {
        let mut by_add = Cart::new();
        by_add.add_item("Burger", 250.0, None);
        by_add.add_item("Burger", 250.0, None);

        let mut by_set = Cart::new();
        by_set.add_item("Burger", 250.0, None);
        by_set.set_quantity(&LineKey::from_name("Burger"), 2);

        assert_eq!(by_add.lines(), by_set.lines());
        assert_eq!(by_add.lines()[0].quantity, 2);
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let mut by_zero = Cart::new();
        by_zero.add_item("Coke", 60.0, None);
        by_zero.add_item("Burger", 250.0, None);
        by_zero.set_quantity(&LineKey::from_name("Coke"), 0);

        let mut by_remove = Cart::new();
        by_remove.add_item("Coke", 60.0, None);
        by_remove.add_item("Burger", 250.0, None);
        by_remove.remove_item(&LineKey::from_name("Coke"));

        assert_eq!(by_zero.lines(), by_remove.lines());
        assert_eq!(by_zero.len(), 1);
    }

    #[test]
    fn test_negative_quantity_removes() {
        let mut cart = Cart::new();
        cart.add_item("Tea", 20.0, None);
        cart.set_quantity(&LineKey::from_name("Tea"), -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_item("Tea", 20.0, None);
        cart.remove_item(&LineKey::from_name("Coffee"));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_carries_default_instructions_once() {
        let mut cart = Cart::new();
        cart.add_item("Paneer Tikka", 180.0, Some("less spicy".to_string()));
        cart.add_item("Paneer Tikka", 180.0, Some("ignored on increment".to_string()));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(
            cart.lines()[0].special_instructions.as_deref(),
            Some("less spicy")
        );
    }

    #[test]
    fn test_totals_recompute_after_mutation() {
        let config = EngineConfig::new(0.05);
        let mut cart = Cart::new();
        cart.add_item("Burger", 250.0, None);
        cart.add_item("Burger", 250.0, None);
        cart.add_item("Coke", 60.0, None);

        let totals = cart.totals(None, &config);
        assert_eq!(totals.subtotal, 560.0);

        cart.remove_item(&LineKey::from_name("Coke"));
        let totals = cart.totals(None, &config);
        assert_eq!(totals.subtotal, 500.0);
    }
}
