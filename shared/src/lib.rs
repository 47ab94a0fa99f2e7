//! Shared types for the Brigade order engine
//!
//! Domain types, status enums, and collaborator contracts used across the
//! engine and the REST client crates.

pub mod error;
pub mod kot;
pub mod models;
pub mod order;
pub mod service;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ServiceError, ServiceResult};
pub use kot::{KotTicket, Station, TicketLine, TicketStatus};
pub use order::{
    CartLine, Channel, ConfirmedOrder, DeliveryInfo, Discount, DiscountKind, OrderDraft,
    OrderStatus, OrderTotals, SessionContext, WaiterInfo,
};
pub use service::{OrderService, TableService, TicketService};
