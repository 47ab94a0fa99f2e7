//! Totals calculator
//!
//! Uses rust_decimal for precise calculations, stores as f64.

use rust_decimal::prelude::*;

use shared::order::{CartLine, Discount, DiscountKind, OrderTotals};

use crate::config::EngineConfig;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Sum of `unit_price * quantity` over all lines
///
/// Independent of line order; all inputs are pre-validated non-negative.
pub fn subtotal(lines: &[CartLine]) -> f64 {
    let sum = lines.iter().fold(Decimal::ZERO, |acc, line| {
        acc + to_decimal(line.unit_price) * Decimal::from(line.quantity)
    });
    to_f64(sum)
}

/// Discount amount against the subtotal
///
/// Percentage is capped at 100%; the result is always clamped to the
/// subtotal so a discount can never make totals negative.
pub fn discount_amount(subtotal: f64, discount: Option<&Discount>) -> f64 {
    let Some(discount) = discount else {
        return 0.0;
    };

    let sub = to_decimal(subtotal);
    let raw = match discount.kind {
        DiscountKind::Percentage(pct) => {
            let pct = to_decimal(pct).min(Decimal::ONE_HUNDRED).max(Decimal::ZERO);
            sub * pct / Decimal::ONE_HUNDRED
        }
        DiscountKind::FlatAmount(amount) => to_decimal(amount).max(Decimal::ZERO),
    };

    to_f64(raw.min(sub))
}

/// Tax on the post-discount amount
pub fn tax_amount(subtotal: f64, discount_amount: f64, rate: f64) -> f64 {
    let taxable = (to_decimal(subtotal) - to_decimal(discount_amount)).max(Decimal::ZERO);
    to_f64(taxable * to_decimal(rate))
}

/// Flat-rate service charge on the subtotal
///
/// Shipped disabled by policy; the computation stays available and
/// independently toggle-able.
pub fn service_charge(subtotal: f64, rate: f64, enabled: bool) -> f64 {
    if !enabled {
        return 0.0;
    }
    to_f64(to_decimal(subtotal) * to_decimal(rate))
}

/// `max(0, subtotal - discount) + tax + service_charge`
pub fn total(subtotal: f64, tax: f64, service_charge: f64, discount_amount: f64) -> f64 {
    let base = (to_decimal(subtotal) - to_decimal(discount_amount)).max(Decimal::ZERO);
    to_f64(base + to_decimal(tax) + to_decimal(service_charge))
}

/// Compute the full totals block for a cart
pub fn compute_totals(
    lines: &[CartLine],
    discount: Option<&Discount>,
    config: &EngineConfig,
) -> OrderTotals {
    let subtotal = subtotal(lines);
    let discount = discount_amount(subtotal, discount);
    let tax = tax_amount(subtotal, discount, config.tax_rate);
    let service_charge = service_charge(
        subtotal,
        config.service_charge_rate,
        config.service_charge_enabled,
    );
    let total = total(subtotal, tax, service_charge, discount);

    OrderTotals {
        subtotal,
        tax,
        service_charge,
        discount,
        total,
    }
}
