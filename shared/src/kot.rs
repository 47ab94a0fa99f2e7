//! Kitchen Order Ticket types
//!
//! One confirmed order owns 1..N tickets (one per selected station); tickets
//! are created together but their statuses evolve independently. A ticket is
//! never deleted by the client - it only drops off the active view once its
//! parent order completes.

use serde::{Deserialize, Serialize};

use crate::order::OrderStatus;

// ============================================================================
// Station
// ============================================================================

/// Fulfillment station that can independently receive and prepare
/// a subset of an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Station {
    #[default]
    Kitchen,
    Bar,
    Beverage,
}

impl Station {
    /// Display label used on tickets and the management board
    pub fn label(&self) -> &'static str {
        match self {
            Station::Kitchen => "Kitchen",
            Station::Bar => "Bar",
            Station::Beverage => "Beverage",
        }
    }
}

// ============================================================================
// Ticket Status
// ============================================================================

/// Ticket preparation status
///
/// Strictly forward-only, adjacent-only: Pending → Preparing → Ready → Sent.
/// The transition table is enforced in the core rather than relying on the
/// UI to only offer the next valid button.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Sent,
}

impl TicketStatus {
    /// The next status in the lifecycle, or `None` from the terminal state
    pub fn next(&self) -> Option<TicketStatus> {
        match self {
            TicketStatus::Pending => Some(TicketStatus::Preparing),
            TicketStatus::Preparing => Some(TicketStatus::Ready),
            TicketStatus::Ready => Some(TicketStatus::Sent),
            TicketStatus::Sent => None,
        }
    }

    /// Whether a transition from `self` to `target` is allowed
    pub fn can_transition_to(&self, target: TicketStatus) -> bool {
        self.next() == Some(target)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TicketStatus::Sent)
    }
}

// ============================================================================
// Ticket
// ============================================================================

/// One item line snapshot on a ticket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TicketLine {
    pub name: String,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// A per-station kitchen order ticket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KotTicket {
    /// Server-assigned ticket id
    pub id: String,
    /// Human-facing ticket number
    pub ticket_number: String,
    /// Parent order id
    pub order_id: String,
    /// Parent order number
    pub order_number: String,
    pub station: Station,
    /// Snapshot of the order lines routed to this station
    pub items: Vec<TicketLine>,
    pub status: TicketStatus,
    /// Printed-ness is orthogonal to the preparation status
    #[serde(default)]
    pub is_printed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printed_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<u32>,
    /// Parent order status, projected by the backend on list reads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<OrderStatus>,
    /// Creation timestamp (unix millis)
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_only_transitions() {
        assert!(TicketStatus::Pending.can_transition_to(TicketStatus::Preparing));
        assert!(TicketStatus::Preparing.can_transition_to(TicketStatus::Ready));
        assert!(TicketStatus::Ready.can_transition_to(TicketStatus::Sent));

        // No skips, no backward moves
        assert!(!TicketStatus::Pending.can_transition_to(TicketStatus::Ready));
        assert!(!TicketStatus::Ready.can_transition_to(TicketStatus::Preparing));
        assert!(!TicketStatus::Sent.can_transition_to(TicketStatus::Pending));
        assert!(TicketStatus::Sent.next().is_none());
    }
}
