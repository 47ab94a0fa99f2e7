//! Input validation helpers
//!
//! Centralized limits and field checks used by the submission coordinator.
//! Limits are chosen for reasonable UX and ticket rendering; the backend is
//! authoritative but these fail fast before any network call.

use shared::order::CartLine;

use crate::utils::error::ValidationReport;

// ── Limits ──────────────────────────────────────────────────────────

/// Notes, reasons, special instructions
pub const MAX_NOTE_LEN: usize = 500;

/// Item and customer names
pub const MAX_NAME_LEN: usize = 200;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Maximum allowed unit price
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 9999;

// ── Field checks ────────────────────────────────────────────────────

/// Require a non-empty trimmed string no longer than `max_len`
pub fn require_text(
    report: &mut ValidationReport,
    value: Option<&str>,
    field: &str,
    max_len: usize,
) {
    match value {
        Some(v) if !v.trim().is_empty() => {
            if v.len() > max_len {
                report.push(
                    field,
                    format!("is too long ({} chars, max {max_len})", v.len()),
                );
            }
        }
        _ => report.push(field, "is required"),
    }
}

/// Require a positive integer table number
pub fn require_table_number(report: &mut ValidationReport, value: Option<u32>, field: &str) {
    match value {
        Some(n) if n > 0 => {}
        _ => report.push(field, "must be a positive table number"),
    }
}

/// Defensive re-validation of a cart line at submission time
///
/// The cart aggregator already guarantees these, but submission re-checks
/// so a corrupted draft can never reach the network.
pub fn check_line(report: &mut ValidationReport, index: usize, line: &CartLine) {
    let field = format!("items[{index}]");

    if line.name.trim().is_empty() {
        report.push(field.clone(), "has no item name");
    }
    if !line.unit_price.is_finite() || line.unit_price <= 0.0 {
        report.push(
            field.clone(),
            format!("unit price must be positive, got {}", line.unit_price),
        );
    } else if line.unit_price > MAX_PRICE {
        report.push(field.clone(), "unit price exceeds the allowed maximum");
    }
    if line.quantity <= 0 {
        report.push(
            field.clone(),
            format!("quantity must be positive, got {}", line.quantity),
        );
    } else if line.quantity > MAX_QUANTITY {
        report.push(field.clone(), "quantity exceeds the allowed maximum");
    }
    if let Some(note) = &line.special_instructions
        && note.len() > MAX_NOTE_LEN
    {
        report.push(field, format!("instructions too long ({} chars)", note.len()));
    }
}

/// Backend identifier shape: 24-char hex object id
///
/// External refs that do not match are dropped (treated as unset) rather
/// than failing the submission.
pub fn is_object_ref(value: &str) -> bool {
    value.len() == 24 && value.bytes().all(|b| b.is_ascii_hexdigit())
}
