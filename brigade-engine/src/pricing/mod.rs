//! Pricing Engine
//!
//! Pure, stateless functions over a cart line list and optional discount.
//! Recomputed synchronously on every cart or discount mutation; input sets
//! are small (order of tens of lines) so there is no caching.

pub mod calculator;

pub use calculator::{
    compute_totals, discount_amount, service_charge, subtotal, tax_amount, total,
};
