//! Shared types for order composition and submission

use serde::{Deserialize, Serialize};

// ============================================================================
// Channel
// ============================================================================

/// Order-taking channel
///
/// Determines which fields are required at submission time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    /// 堂食 - order taken at a table
    #[default]
    DineIn,
    /// 打包 - picked up at the counter, still tied to a table slot
    Takeaway,
    /// 电话下单
    Phone,
    /// 线上下单
    Online,
}

impl Channel {
    /// Whether this channel carries a table number
    pub fn uses_table(&self) -> bool {
        matches!(self, Channel::DineIn | Channel::Takeaway)
    }

    /// Whether this channel requires delivery contact details
    pub fn requires_delivery(&self) -> bool {
        matches!(self, Channel::Phone | Channel::Online)
    }
}

// ============================================================================
// Cart Types
// ============================================================================

/// A single cart line in an order draft
///
/// The item name is the identity key within one cart; quantity is never
/// stored as zero or negative (a non-positive quantity removes the line).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Item name (identity key within the cart)
    pub name: String,
    /// Unit price, non-negative
    pub unit_price: f64,
    /// Quantity, always >= 1
    pub quantity: i32,
    /// Special preparation instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

impl CartLine {
    pub fn new(name: impl Into<String>, unit_price: f64, quantity: i32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
            special_instructions: None,
        }
    }

    pub fn with_instructions(mut self, text: impl Into<String>) -> Self {
        self.special_instructions = Some(text.into());
        self
    }
}

// ============================================================================
// Discount
// ============================================================================

/// Discount kind applied against the order subtotal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    /// Percentage of subtotal, 0..=100
    Percentage(f64),
    /// Flat amount, >= 0
    FlatAmount(f64),
}

/// Order-level discount
///
/// The resulting discount amount is always clamped to the subtotal, so a
/// discount can never drive the total negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Discount {
    pub kind: DiscountKind,
    /// Reason noted by the operator (for the audit trail)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_note: Option<String>,
}

impl Discount {
    pub fn percentage(value: f64) -> Self {
        Self {
            kind: DiscountKind::Percentage(value),
            reason_note: None,
        }
    }

    pub fn flat(value: f64) -> Self {
        Self {
            kind: DiscountKind::FlatAmount(value),
            reason_note: None,
        }
    }
}

// ============================================================================
// Totals
// ============================================================================

/// Computed order totals
///
/// Derived values only - never persisted independently of the cart lines
/// they were computed from. All amounts are rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub service_charge: f64,
    pub discount: f64,
    pub total: f64,
}

// ============================================================================
// Delivery
// ============================================================================

/// Delivery contact details for Phone/Online channels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DeliveryInfo {
    pub address: String,
    pub phone: String,
    /// Requested delivery time, free-form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

// ============================================================================
// Order Draft
// ============================================================================

/// An unsubmitted order under construction
///
/// Created empty when a take-order surface opens, mutated by the cart and
/// form fields, cleared on successful submission or explicit cancel.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderDraft {
    pub channel: Channel,
    pub lines: Vec<CartLine>,
    /// Required for DineIn/Takeaway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// External customer id; dropped at submission if malformed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<DeliveryInfo>,
    /// External waiter id; dropped at submission if malformed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiter_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
}

impl OrderDraft {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Reset the draft back to an empty state, keeping the channel
    pub fn clear(&mut self) {
        *self = Self::new(self.channel);
    }
}

// ============================================================================
// Confirmed Order
// ============================================================================

/// A draft accepted and assigned an identity by the backend
///
/// Immutable from the client's perspective once accepted; later changes go
/// through explicit update/status operations against the Order Service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmedOrder {
    /// Server-assigned order id
    pub id: String,
    /// Human-facing order number
    pub order_number: String,
    pub channel: Channel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<u32>,
    /// Totals snapshot at submission time
    pub totals: OrderTotals,
    /// Acceptance timestamp (unix millis)
    pub created_at: i64,
}

// ============================================================================
// Session Context
// ============================================================================

/// Waiter assigned to an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WaiterInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Phone number on file, used for the chat notification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Explicit per-operation context
///
/// Passed into the coordinator instead of an ambient global lookup, so tests
/// can inject fixtures deterministically.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub operator_id: String,
    pub operator_name: String,
    /// Waiter attached to the order, if any
    pub waiter: Option<WaiterInfo>,
}

impl SessionContext {
    pub fn new(operator_id: impl Into<String>, operator_name: impl Into<String>) -> Self {
        Self {
            operator_id: operator_id.into(),
            operator_name: operator_name.into(),
            waiter: None,
        }
    }

    pub fn with_waiter(mut self, waiter: WaiterInfo) -> Self {
        self.waiter = Some(waiter);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_field_requirements() {
        assert!(Channel::DineIn.uses_table());
        assert!(Channel::Takeaway.uses_table());
        assert!(!Channel::Phone.uses_table());
        assert!(Channel::Phone.requires_delivery());
        assert!(Channel::Online.requires_delivery());
        assert!(!Channel::DineIn.requires_delivery());
    }

    #[test]
    fn test_draft_clear_keeps_channel() {
        let mut draft = OrderDraft::new(Channel::Takeaway);
        draft.lines.push(CartLine::new("Burger", 250.0, 2));
        draft.table_number = Some(4);
        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft.channel, Channel::Takeaway);
        assert!(draft.table_number.is_none());
    }

    #[test]
    fn test_discount_serde_shape() {
        let d = Discount::percentage(10.0);
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["kind"]["type"], "PERCENTAGE");
        assert_eq!(json["kind"]["value"], 10.0);
    }
}
