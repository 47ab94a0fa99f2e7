//! KOT Lifecycle Tracker
//!
//! Drives a ticket through Pending → Preparing → Ready → Sent. Transitions
//! are validated in the core against the status transition table rather
//! than trusting the UI to only offer the next valid button.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use shared::kot::{KotTicket, TicketStatus};
use shared::order::OrderStatus;
use shared::{OrderService, ServiceError, TicketService};

use crate::effects::run_effect;

/// Lifecycle operation failure
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Invalid ticket transition {from:?} -> {to:?}")]
    InvalidTransition {
        from: TicketStatus,
        to: TicketStatus,
    },

    /// The ticket is already in its terminal status; there is nothing to
    /// advance to
    #[error("Ticket {0} is already sent")]
    AlreadyTerminal(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Per-ticket status state machine over the Ticket Service
pub struct LifecycleTracker {
    tickets: Arc<dyn TicketService>,
    orders: Arc<dyn OrderService>,
}

impl LifecycleTracker {
    pub fn new(tickets: Arc<dyn TicketService>, orders: Arc<dyn OrderService>) -> Self {
        Self { tickets, orders }
    }

    /// Advance a ticket to its next status
    ///
    /// Entering `Preparing` also advances the parent order to `Confirmed`
    /// as a best-effort call; a failure there never rolls back the ticket
    /// transition.
    pub async fn advance(&self, ticket: &KotTicket) -> Result<TicketStatus, LifecycleError> {
        let target = ticket
            .status
            .next()
            .ok_or_else(|| LifecycleError::AlreadyTerminal(ticket.ticket_number.clone()))?;
        self.transition(ticket, target).await
    }

    /// Transition a ticket to an explicit target status
    ///
    /// Rejects backward and skipping transitions before any network call.
    pub async fn transition(
        &self,
        ticket: &KotTicket,
        target: TicketStatus,
    ) -> Result<TicketStatus, LifecycleError> {
        if !ticket.status.can_transition_to(target) {
            return Err(LifecycleError::InvalidTransition {
                from: ticket.status,
                to: target,
            });
        }

        self.tickets.set_ticket_status(&ticket.id, target).await?;
        info!(
            ticket_id = %ticket.id,
            from = ?ticket.status,
            to = ?target,
            "Ticket status advanced"
        );

        if target == TicketStatus::Preparing {
            let outcome = run_effect(
                "advance_order_status",
                self.orders
                    .set_order_status(&ticket.order_id, OrderStatus::Confirmed),
            )
            .await;
            if !outcome.ok {
                warn!(
                    order_id = %ticket.order_id,
                    "Order status advance failed; ticket transition stands"
                );
            }
        }

        Ok(target)
    }

    /// Persist the printed flag; orthogonal to the status state machine
    pub async fn mark_printed(
        &self,
        ticket_id: &str,
        printed_by: Option<&str>,
    ) -> Result<(), LifecycleError> {
        self.tickets.mark_printed(ticket_id, printed_by).await?;
        Ok(())
    }
}
