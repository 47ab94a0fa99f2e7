//! Order status

use serde::{Deserialize, Serialize};

/// Order status as reported by the backend
///
/// The engine only ever writes `Confirmed` (when a ticket enters
/// preparation); all other values are read-side projections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Served,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Whether tickets for this order should still appear on the KOT board
    ///
    /// Tickets remain visible through `Served` because a bill may still be
    /// pending print or payment; only `Completed` hides them.
    pub fn is_kot_visible(&self) -> bool {
        *self != OrderStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_served_orders_stay_on_board() {
        assert!(OrderStatus::Served.is_kot_visible());
        assert!(!OrderStatus::Completed.is_kot_visible());
        assert!(OrderStatus::Cancelled.is_kot_visible());
    }
}
