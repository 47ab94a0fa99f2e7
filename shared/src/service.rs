//! Collaborator contracts consumed by the engine
//!
//! The backend is an opaque REST service; these traits abstract the exact
//! request/response envelopes so the engine can be exercised against mocks.
//! `brigade-client` provides the reqwest-backed implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ServiceResult;
use crate::kot::{KotTicket, Station, TicketStatus};
use crate::models::{TableRef, TableStatus};
use crate::order::{Channel, DeliveryInfo, Discount, OrderStatus};

// ============================================================================
// Order Service DTOs
// ============================================================================

/// One line item on the wire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadLine {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Normalized order creation payload
///
/// Built by the submission coordinator from a validated draft; malformed
/// external refs have already been dropped by the time this is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayload {
    pub channel: Channel,
    pub items: Vec<PayloadLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<DeliveryInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiter_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    pub operator_id: String,
    pub operator_name: String,
}

/// Server response to a successful order creation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedOrder {
    pub id: String,
    pub order_number: String,
}

// ============================================================================
// Ticket Service DTOs
// ============================================================================

/// Ticket creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTicketRequest {
    /// Client-generated idempotency key; the backend is the sole arbiter
    /// of duplicate-ticket prevention
    pub command_id: String,
    pub order_id: String,
    pub station: Station,
}

/// Server-side filters for listing tickets
///
/// The management board fetches broadly and filters locally; this query is
/// only narrowed when a single order's tickets are needed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TicketQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl TicketQuery {
    pub fn for_order(order_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
        }
    }
}

// ============================================================================
// Table Service DTOs
// ============================================================================

/// Server-side filters for listing tables
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TableQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<u32>,
}

// ============================================================================
// Service Traits
// ============================================================================

/// Order persistence collaborator
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Create an order; exactly one attempt per call, no retries
    async fn create_order(&self, payload: &OrderPayload) -> ServiceResult<CreatedOrder>;

    /// Replace the stored payload of an existing order
    async fn update_order(&self, order_id: &str, payload: &OrderPayload) -> ServiceResult<()>;

    /// Advance the order status
    async fn set_order_status(&self, order_id: &str, status: OrderStatus) -> ServiceResult<()>;
}

/// Kitchen ticket collaborator
#[async_trait]
pub trait TicketService: Send + Sync {
    async fn create_ticket(&self, request: &CreateTicketRequest) -> ServiceResult<KotTicket>;

    async fn list_tickets(&self, query: &TicketQuery) -> ServiceResult<Vec<KotTicket>>;

    async fn set_ticket_status(&self, ticket_id: &str, status: TicketStatus) -> ServiceResult<()>;

    /// Persist the printed flag; printing already happened physically, so
    /// callers treat a failure here as best-effort
    async fn mark_printed(&self, ticket_id: &str, printed_by: Option<&str>) -> ServiceResult<()>;
}

/// Table occupancy collaborator
#[async_trait]
pub trait TableService: Send + Sync {
    async fn list_tables(&self, query: &TableQuery) -> ServiceResult<Vec<TableRef>>;

    async fn set_table_status(&self, table_id: &str, status: TableStatus) -> ServiceResult<()>;
}
