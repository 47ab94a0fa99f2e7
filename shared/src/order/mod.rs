//! Order domain types
//!
//! - **types**: cart lines, discounts, totals, drafts, confirmed orders
//! - **status**: order status enum shared with the KOT read side

pub mod status;
pub mod types;

pub use status::OrderStatus;
pub use types::{
    CartLine, Channel, ConfirmedOrder, DeliveryInfo, Discount, DiscountKind, OrderDraft,
    OrderTotals, SessionContext, WaiterInfo,
};
