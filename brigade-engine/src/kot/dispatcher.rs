//! KOT Dispatcher
//!
//! Fans a confirmed order out into one ticket per selected station. Each
//! creation is independent: a failure for one station does not cancel or
//! roll back the others, and never fails the parent order - the order was
//! already confirmed before dispatch begins. That failure isolation is the
//! central invariant of this module.

use std::sync::Arc;

use futures::future::join_all;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use shared::TicketService;
use shared::kot::{KotTicket, Station};
use shared::order::{ConfirmedOrder, WaiterInfo};
use shared::service::CreateTicketRequest;

use crate::effects::{EffectOutcome, run_effect, run_effect_sync};
use crate::printing::{PrintSurface, TicketRenderer};
use crate::notify::NotificationSender;

/// Dispatch rejected before any ticket was created
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// Station selection is a prerequisite for table channels
    #[error("Select at least one station before sending the order")]
    NoStations,
}

/// One station whose ticket creation failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationFailure {
    pub station: Station,
    pub reason: String,
}

/// Aggregate result of a dispatch
///
/// Partial ticket failures are reported here and logged, never surfaced as
/// blocking errors: the parent operation is a success whenever the order
/// itself was created.
#[derive(Debug)]
pub struct DispatchReport {
    pub order_id: String,
    /// Tickets created, one per succeeded station
    pub tickets: Vec<KotTicket>,
    pub failed: Vec<StationFailure>,
    /// Outcomes of the best-effort post-success effects
    pub effects: Vec<EffectOutcome>,
    /// User-facing summary naming the stations that succeeded
    pub message: String,
}

impl DispatchReport {
    pub fn succeeded_stations(&self) -> Vec<Station> {
        self.tickets.iter().map(|t| t.station).collect()
    }

    pub fn is_full_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Creates per-station tickets for confirmed orders
pub struct KotDispatcher {
    tickets: Arc<dyn TicketService>,
    printer: Arc<dyn PrintSurface>,
    notifier: Option<Arc<dyn NotificationSender>>,
    renderer: TicketRenderer,
}

impl KotDispatcher {
    pub fn new(
        tickets: Arc<dyn TicketService>,
        printer: Arc<dyn PrintSurface>,
        renderer: TicketRenderer,
    ) -> Self {
        Self {
            tickets,
            printer,
            notifier: None,
            renderer,
        }
    }

    /// Attach the waiter notification channel
    pub fn with_notifier(mut self, notifier: Arc<dyn NotificationSender>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Create one ticket per station, then run the best-effort effects for
    /// the tickets that were created
    ///
    /// Creations are issued concurrently and settled independently; ordering
    /// between stations is not guaranteed.
    pub async fn dispatch(
        &self,
        order: &ConfirmedOrder,
        stations: &[Station],
        waiter: Option<&WaiterInfo>,
    ) -> Result<DispatchReport, DispatchError> {
        let stations = resolve_stations(order, stations)?;

        let creations = stations.iter().map(|&station| {
            let request = CreateTicketRequest {
                command_id: Uuid::new_v4().to_string(),
                order_id: order.id.clone(),
                station,
            };
            async move { (station, self.tickets.create_ticket(&request).await) }
        });

        let mut tickets = Vec::new();
        let mut failed = Vec::new();
        for (station, result) in join_all(creations).await {
            match result {
                Ok(ticket) => tickets.push(ticket),
                Err(e) => {
                    warn!(
                        order_id = %order.id,
                        station = station.label(),
                        error = %e,
                        "Ticket creation failed, continuing with other stations"
                    );
                    failed.push(StationFailure {
                        station,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let effects = self.run_post_effects(order, &tickets, waiter).await;
        let message = summary_message(order, &tickets);

        info!(
            order_id = %order.id,
            created = tickets.len(),
            failed = failed.len(),
            "KOT dispatch settled"
        );

        Ok(DispatchReport {
            order_id: order.id.clone(),
            tickets,
            failed,
            effects,
            message,
        })
    }

    /// Re-render and re-print an existing ticket, best-effort
    pub fn reprint(&self, ticket: &KotTicket) -> EffectOutcome {
        let document = self.renderer.render(ticket);
        run_effect_sync(
            &format!("reprint[{}]", ticket.ticket_number),
            || self.printer.print(&document),
        )
    }

    /// Best-effort side effects, only for tickets that were created
    async fn run_post_effects(
        &self,
        order: &ConfirmedOrder,
        tickets: &[KotTicket],
        waiter: Option<&WaiterInfo>,
    ) -> Vec<EffectOutcome> {
        let mut effects = Vec::new();

        for ticket in tickets {
            let station = ticket.station.label();
            let document = self.renderer.render(ticket);

            let print_outcome =
                run_effect_sync(&format!("print_ticket[{station}]"), || {
                    self.printer.print(&document)
                });
            let printed = print_outcome.ok;
            effects.push(print_outcome);

            // Persist the flag only when the document physically printed
            let flag_name = format!("mark_printed[{station}]");
            if printed {
                effects.push(
                    run_effect(&flag_name, self.tickets.mark_printed(&ticket.id, None)).await,
                );
            } else {
                effects.push(EffectOutcome::skipped(flag_name, "ticket did not print"));
            }
        }

        if let (Some(notifier), Some(waiter)) = (&self.notifier, waiter)
            && let Some(phone) = &waiter.phone
            && !tickets.is_empty()
        {
            let message = waiter_message(order, tickets, &waiter.name);
            effects.push(run_effect_sync("notify_waiter", || {
                notifier.send(phone, &message)
            }));
        }

        effects
    }
}

/// Apply the station-selection prerequisite
///
/// The Online/Phone legacy path defaults to Kitchen when nothing was
/// chosen; table channels block with a user-facing error instead.
fn resolve_stations(
    order: &ConfirmedOrder,
    stations: &[Station],
) -> Result<Vec<Station>, DispatchError> {
    let mut unique: Vec<Station> = Vec::new();
    for &station in stations {
        if !unique.contains(&station) {
            unique.push(station);
        }
    }

    if unique.is_empty() {
        if order.channel.requires_delivery() {
            unique.push(Station::Kitchen);
        } else {
            return Err(DispatchError::NoStations);
        }
    }

    Ok(unique)
}

fn summary_message(order: &ConfirmedOrder, tickets: &[KotTicket]) -> String {
    if tickets.is_empty() {
        return format!("Order {} confirmed. No KOTs could be sent", order.order_number);
    }
    let stations = tickets
        .iter()
        .map(|t| t.station.label())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Order {} confirmed. KOT sent to: {stations}", order.order_number)
}

fn waiter_message(order: &ConfirmedOrder, tickets: &[KotTicket], waiter_name: &str) -> String {
    let table = order
        .table_number
        .map(|n| format!(" (Table {n})"))
        .unwrap_or_default();
    let stations = tickets
        .iter()
        .map(|t| t.station.label())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Hi {waiter_name}, order {}{table} is in: {stations}. Total {:.2}",
        order.order_number, order.totals.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::Channel;

    fn confirmed(channel: Channel) -> ConfirmedOrder {
        ConfirmedOrder {
            id: "64a1f2c3d4e5f60718293a4b".to_string(),
            order_number: "A1023".to_string(),
            channel,
            table_number: Some(4),
            totals: Default::default(),
            created_at: 0,
        }
    }

    #[test]
    fn test_no_stations_blocks_table_channels() {
        let err = resolve_stations(&confirmed(Channel::DineIn), &[]).unwrap_err();
        assert_eq!(err, DispatchError::NoStations);
    }

    #[test]
    fn test_no_stations_defaults_kitchen_for_remote_channels() {
        let stations = resolve_stations(&confirmed(Channel::Phone), &[]).unwrap();
        assert_eq!(stations, vec![Station::Kitchen]);
        let stations = resolve_stations(&confirmed(Channel::Online), &[]).unwrap();
        assert_eq!(stations, vec![Station::Kitchen]);
    }

    #[test]
    fn test_duplicate_stations_collapse() {
        let stations = resolve_stations(
            &confirmed(Channel::DineIn),
            &[Station::Bar, Station::Kitchen, Station::Bar],
        )
        .unwrap();
        assert_eq!(stations, vec![Station::Bar, Station::Kitchen]);
    }
}
