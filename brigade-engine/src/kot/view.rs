//! KOT management view
//!
//! Read-side projection of the global ticket list. The full set is
//! refetched wholesale on demand (manual refresh and after any mutating
//! action) and filtered locally - this avoids local/remote divergence at
//! the cost of round-trips, which is acceptable at expected ticket volumes.

use std::sync::Arc;

use shared::kot::{KotTicket, Station, TicketStatus};
use shared::service::TicketQuery;
use shared::{ServiceResult, TicketService};

/// User-selected filters for the management board
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub station: Option<Station>,
    pub printed: Option<bool>,
    /// Free-text match over ticket number, order number, table number and
    /// station label
    pub search: Option<String>,
}

impl TicketFilter {
    fn matches(&self, ticket: &KotTicket) -> bool {
        if let Some(status) = self.status
            && ticket.status != status
        {
            return false;
        }
        if let Some(station) = self.station
            && ticket.station != station
        {
            return false;
        }
        if let Some(printed) = self.printed
            && ticket.is_printed != printed
        {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() && !search_haystack(ticket).contains(&needle) {
                return false;
            }
        }
        true
    }
}

fn search_haystack(ticket: &KotTicket) -> String {
    let table = ticket
        .table_number
        .map(|n| n.to_string())
        .unwrap_or_default();
    format!(
        "{} {} {} {}",
        ticket.ticket_number, ticket.order_number, table,
        ticket.station.label()
    )
    .to_lowercase()
}

/// Project the fetched ticket set for display
///
/// Two independent predicates run before the user filters: tickets whose
/// parent order is exactly `Completed` are dropped (tickets stay visible
/// through `Served` because a bill may still be pending print or payment),
/// then the user filters apply. Always sorted newest-created-first.
pub fn project(mut tickets: Vec<KotTicket>, filter: &TicketFilter) -> Vec<KotTicket> {
    tickets.retain(|t| {
        t.order_status.is_none_or(|s| s.is_kot_visible()) && filter.matches(t)
    });
    tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    tickets
}

/// Poll-based board over the Ticket Service
pub struct KotBoard {
    tickets: Arc<dyn TicketService>,
}

impl KotBoard {
    pub fn new(tickets: Arc<dyn TicketService>) -> Self {
        Self { tickets }
    }

    /// Refetch the full ticket set and project it through the filter
    pub async fn refresh(&self, filter: &TicketFilter) -> ServiceResult<Vec<KotTicket>> {
        let tickets = self.tickets.list_tickets(&TicketQuery::default()).await?;
        Ok(project(tickets, filter))
    }

    /// Fetch a single order's tickets, newest first
    ///
    /// Used by the order detail surface; the query is narrowed server-side
    /// instead of filtering the global list locally.
    pub async fn refresh_for_order(&self, order_id: &str) -> ServiceResult<Vec<KotTicket>> {
        let tickets = self
            .tickets
            .list_tickets(&TicketQuery::for_order(order_id))
            .await?;
        Ok(project(tickets, &TicketFilter::default()))
    }
}
