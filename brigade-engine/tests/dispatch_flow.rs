//! End-to-end flows over mock collaborators
//!
//! Exercises the coordinator → dispatcher → lifecycle chain the way the
//! take-order screens drive it, with recording mocks standing in for the
//! REST backend.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use brigade_engine::kot::{KotBoard, KotDispatcher, LifecycleTracker};
use brigade_engine::printing::{PrintError, PrintSurface, TicketRenderer};
use brigade_engine::notify::{NotificationSender, NotifyError};
use brigade_engine::orders::OrderCoordinator;
use brigade_engine::tables::TableSynchronizer;
use brigade_engine::{EngineConfig, SubmitError};

use shared::kot::{KotTicket, Station, TicketStatus};
use shared::models::{TableRef, TableStatus};
use shared::order::{
    CartLine, Channel, ConfirmedOrder, OrderDraft, OrderStatus, SessionContext, WaiterInfo,
};
use shared::service::{
    CreateTicketRequest, CreatedOrder, OrderPayload, TableQuery, TicketQuery,
};
use shared::{OrderService, ServiceError, ServiceResult, TableService, TicketService};

// ========================================================================
// Recording mocks
// ========================================================================

#[derive(Default)]
struct MockOrders {
    fail_with: Option<ServiceError>,
    created: Mutex<Vec<OrderPayload>>,
    status_calls: Mutex<Vec<(String, OrderStatus)>>,
    fail_status: bool,
}

#[async_trait]
impl OrderService for MockOrders {
    async fn create_order(&self, payload: &OrderPayload) -> ServiceResult<CreatedOrder> {
        if let Some(e) = &self.fail_with {
            return Err(e.clone());
        }
        self.created.lock().push(payload.clone());
        Ok(CreatedOrder {
            id: "64a1f2c3d4e5f60718293a4b".to_string(),
            order_number: "A1023".to_string(),
        })
    }

    async fn update_order(&self, _order_id: &str, _payload: &OrderPayload) -> ServiceResult<()> {
        Ok(())
    }

    async fn set_order_status(&self, order_id: &str, status: OrderStatus) -> ServiceResult<()> {
        if self.fail_status {
            return Err(ServiceError::Backend("order archive offline".to_string()));
        }
        self.status_calls.lock().push((order_id.to_string(), status));
        Ok(())
    }
}

#[derive(Default)]
struct MockTickets {
    fail_stations: Vec<Station>,
    stored: Mutex<Vec<KotTicket>>,
    created: Mutex<Vec<CreateTicketRequest>>,
    printed_flags: Mutex<Vec<String>>,
    status_calls: Mutex<Vec<(String, TicketStatus)>>,
    seq: AtomicU32,
}

impl MockTickets {
    fn failing_for(stations: Vec<Station>) -> Self {
        Self {
            fail_stations: stations,
            ..Default::default()
        }
    }

    fn build_ticket(&self, request: &CreateTicketRequest) -> KotTicket {
        let n = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        KotTicket {
            id: format!("tic-{n}"),
            ticket_number: format!("KOT-{n}"),
            order_id: request.order_id.clone(),
            order_number: "A1023".to_string(),
            station: request.station,
            items: vec![],
            status: TicketStatus::Pending,
            is_printed: false,
            printed_at: None,
            printed_by: None,
            table_number: Some(4),
            order_status: None,
            created_at: 1_700_000_000_000 + n as i64,
        }
    }
}

#[async_trait]
impl TicketService for MockTickets {
    async fn create_ticket(&self, request: &CreateTicketRequest) -> ServiceResult<KotTicket> {
        if self.fail_stations.contains(&request.station) {
            return Err(ServiceError::Backend("station printer queue full".to_string()));
        }
        self.created.lock().push(request.clone());
        Ok(self.build_ticket(request))
    }

    async fn list_tickets(&self, query: &TicketQuery) -> ServiceResult<Vec<KotTicket>> {
        let tickets = self.stored.lock().clone();
        Ok(match &query.order_id {
            Some(id) => tickets.into_iter().filter(|t| &t.order_id == id).collect(),
            None => tickets,
        })
    }

    async fn set_ticket_status(&self, ticket_id: &str, status: TicketStatus) -> ServiceResult<()> {
        self.status_calls.lock().push((ticket_id.to_string(), status));
        Ok(())
    }

    async fn mark_printed(&self, ticket_id: &str, _printed_by: Option<&str>) -> ServiceResult<()> {
        self.printed_flags.lock().push(ticket_id.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct MockTables {
    status_calls: Mutex<Vec<(String, TableStatus)>>,
}

#[async_trait]
impl TableService for MockTables {
    async fn list_tables(&self, query: &TableQuery) -> ServiceResult<Vec<TableRef>> {
        Ok(query
            .table_number
            .map(|n| {
                vec![TableRef {
                    id: format!("table-{n}"),
                    table_number: n,
                    status: TableStatus::Available,
                }]
            })
            .unwrap_or_default())
    }

    async fn set_table_status(&self, table_id: &str, status: TableStatus) -> ServiceResult<()> {
        self.status_calls.lock().push((table_id.to_string(), status));
        Ok(())
    }
}

#[derive(Default)]
struct MockPrinter {
    fail: bool,
    documents: Mutex<Vec<String>>,
}

impl PrintSurface for MockPrinter {
    fn print(&self, document: &str) -> Result<(), PrintError> {
        if self.fail {
            return Err(PrintError::Failed("out of paper".to_string()));
        }
        self.documents.lock().push(document.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct MockNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

impl NotificationSender for MockNotifier {
    fn send(&self, phone: &str, message: &str) -> Result<(), NotifyError> {
        self.sent.lock().push((phone.to_string(), message.to_string()));
        Ok(())
    }
}

// ========================================================================
// Fixtures
// ========================================================================

fn dine_in_draft() -> OrderDraft {
    let mut draft = OrderDraft::new(Channel::DineIn);
    draft.lines.push(CartLine::new("Burger", 250.0, 2));
    draft.lines.push(CartLine::new("Coke", 60.0, 1));
    draft.table_number = Some(4);
    draft
}

fn session() -> SessionContext {
    SessionContext::new("op-1", "Meera").with_waiter(WaiterInfo {
        id: Some("64a1f2c3d4e5f60718293a4c".to_string()),
        name: "Ravi".to_string(),
        phone: Some("9876543210".to_string()),
    })
}

fn confirmed_order() -> ConfirmedOrder {
    ConfirmedOrder {
        id: "64a1f2c3d4e5f60718293a4b".to_string(),
        order_number: "A1023".to_string(),
        channel: Channel::DineIn,
        table_number: Some(4),
        totals: Default::default(),
        created_at: 0,
    }
}

// ========================================================================
// Submission
// ========================================================================

#[tokio::test]
async fn takeaway_without_table_never_reaches_the_network() {
    let orders = Arc::new(MockOrders::default());
    let coordinator = OrderCoordinator::new(orders.clone(), EngineConfig::new(0.05));

    let mut draft = dine_in_draft();
    draft.channel = Channel::Takeaway;
    draft.table_number = None;

    let err = coordinator.submit(&mut draft, &session()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Validation(_)));

    // No network call observed, draft left intact for correction
    assert!(orders.created.lock().is_empty());
    assert_eq!(draft.lines.len(), 2);
}

#[tokio::test]
async fn successful_submit_clears_draft_and_marks_table_serving() {
    let orders = Arc::new(MockOrders::default());
    let tables = Arc::new(MockTables::default());
    let coordinator = OrderCoordinator::new(orders.clone(), EngineConfig::new(0.05))
        .with_table_sync(Arc::new(TableSynchronizer::new(tables.clone())));

    let mut draft = dine_in_draft();
    let confirmed = coordinator.submit(&mut draft, &session()).await.unwrap();

    assert_eq!(confirmed.order_number, "A1023");
    assert_eq!(confirmed.totals.subtotal, 560.0);
    assert_eq!(confirmed.totals.total, 588.0);
    assert!(draft.is_empty());

    let calls = tables.status_calls.lock();
    assert_eq!(calls.as_slice(), &[("table-4".to_string(), TableStatus::Serving)]);
}

#[tokio::test]
async fn phone_order_skips_table_sync() {
    let orders = Arc::new(MockOrders::default());
    let tables = Arc::new(MockTables::default());
    let coordinator = OrderCoordinator::new(orders, EngineConfig::new(0.05))
        .with_table_sync(Arc::new(TableSynchronizer::new(tables.clone())));

    let mut draft = OrderDraft::new(Channel::Phone);
    draft.lines.push(CartLine::new("Burger", 250.0, 1));
    draft.customer_name = Some("Asha".to_string());
    draft.delivery = Some(shared::order::DeliveryInfo {
        address: "12 Hill Road".to_string(),
        phone: "9876543210".to_string(),
        time: None,
    });

    coordinator.submit(&mut draft, &session()).await.unwrap();
    assert!(tables.status_calls.lock().is_empty());
}

#[tokio::test]
async fn expired_session_classified_as_authentication() {
    let orders = Arc::new(MockOrders {
        fail_with: Some(ServiceError::Unauthorized),
        ..Default::default()
    });
    let coordinator = OrderCoordinator::new(orders, EngineConfig::new(0.05));

    let mut draft = dine_in_draft();
    let err = coordinator.submit(&mut draft, &session()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Authentication));
    // Draft preserved for resubmission after re-login
    assert!(!draft.is_empty());
}

// ========================================================================
// Dispatch
// ========================================================================

#[tokio::test]
async fn partial_station_failure_still_reports_success() {
    let tickets = Arc::new(MockTickets::failing_for(vec![Station::Bar]));
    let printer = Arc::new(MockPrinter::default());
    let dispatcher = KotDispatcher::new(tickets.clone(), printer.clone(), TicketRenderer::new(32));

    let report = dispatcher
        .dispatch(&confirmed_order(), &[Station::Kitchen, Station::Bar], None)
        .await
        .unwrap();

    // Kitchen created and printed; Bar failed without blocking anything
    assert_eq!(report.succeeded_stations(), vec![Station::Kitchen]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].station, Station::Bar);
    assert!(!report.is_full_success());
    assert!(report.message.contains("Kitchen"));
    assert!(!report.message.contains("Bar"));

    assert_eq!(printer.documents.lock().len(), 1);
    assert_eq!(tickets.printed_flags.lock().as_slice(), &["tic-1".to_string()]);
}

#[tokio::test]
async fn print_failure_skips_printed_flag_but_not_dispatch() {
    let tickets = Arc::new(MockTickets::default());
    let printer = Arc::new(MockPrinter {
        fail: true,
        ..Default::default()
    });
    let dispatcher = KotDispatcher::new(tickets.clone(), printer, TicketRenderer::new(32));

    let report = dispatcher
        .dispatch(&confirmed_order(), &[Station::Kitchen], None)
        .await
        .unwrap();

    assert_eq!(report.tickets.len(), 1);
    // Flag update skipped because nothing physically printed
    assert!(tickets.printed_flags.lock().is_empty());
    let flag_effect = report
        .effects
        .iter()
        .find(|e| e.name.starts_with("mark_printed"))
        .unwrap();
    assert!(!flag_effect.ok);
}

#[tokio::test]
async fn waiter_with_phone_gets_notified() {
    let tickets = Arc::new(MockTickets::default());
    let printer = Arc::new(MockPrinter::default());
    let notifier = Arc::new(MockNotifier::default());
    let dispatcher = KotDispatcher::new(tickets, printer, TicketRenderer::new(32))
        .with_notifier(notifier.clone());

    let waiter = WaiterInfo {
        id: None,
        name: "Ravi".to_string(),
        phone: Some("9876543210".to_string()),
    };

    dispatcher
        .dispatch(&confirmed_order(), &[Station::Kitchen, Station::Beverage], Some(&waiter))
        .await
        .unwrap();

    let sent = notifier.sent.lock();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].1.contains("A1023"));
    assert!(sent[0].1.contains("Kitchen"));
}

#[tokio::test]
async fn waiter_without_phone_is_not_notified() {
    let tickets = Arc::new(MockTickets::default());
    let printer = Arc::new(MockPrinter::default());
    let notifier = Arc::new(MockNotifier::default());
    let dispatcher = KotDispatcher::new(tickets, printer, TicketRenderer::new(32))
        .with_notifier(notifier.clone());

    let waiter = WaiterInfo {
        id: None,
        name: "Ravi".to_string(),
        phone: None,
    };

    dispatcher
        .dispatch(&confirmed_order(), &[Station::Kitchen], Some(&waiter))
        .await
        .unwrap();
    assert!(notifier.sent.lock().is_empty());
}

// ========================================================================
// Lifecycle
// ========================================================================

fn pending_ticket() -> KotTicket {
    KotTicket {
        id: "tic-1".to_string(),
        ticket_number: "KOT-1".to_string(),
        order_id: "64a1f2c3d4e5f60718293a4b".to_string(),
        order_number: "A1023".to_string(),
        station: Station::Kitchen,
        items: vec![],
        status: TicketStatus::Pending,
        is_printed: false,
        printed_at: None,
        printed_by: None,
        table_number: Some(4),
        order_status: None,
        created_at: 0,
    }
}

#[tokio::test]
async fn entering_preparing_advances_parent_order() {
    let tickets = Arc::new(MockTickets::default());
    let orders = Arc::new(MockOrders::default());
    let tracker = LifecycleTracker::new(tickets.clone(), orders.clone());

    let next = tracker.advance(&pending_ticket()).await.unwrap();
    assert_eq!(next, TicketStatus::Preparing);

    assert_eq!(
        tickets.status_calls.lock().as_slice(),
        &[("tic-1".to_string(), TicketStatus::Preparing)]
    );
    assert_eq!(
        orders.status_calls.lock().as_slice(),
        &[("64a1f2c3d4e5f60718293a4b".to_string(), OrderStatus::Confirmed)]
    );
}

#[tokio::test]
async fn order_advance_failure_does_not_block_ticket() {
    let tickets = Arc::new(MockTickets::default());
    let orders = Arc::new(MockOrders {
        fail_status: true,
        ..Default::default()
    });
    let tracker = LifecycleTracker::new(tickets.clone(), orders);

    let next = tracker.advance(&pending_ticket()).await.unwrap();
    assert_eq!(next, TicketStatus::Preparing);
    assert_eq!(tickets.status_calls.lock().len(), 1);
}

#[tokio::test]
async fn skipping_transition_rejected_before_network() {
    let tickets = Arc::new(MockTickets::default());
    let orders = Arc::new(MockOrders::default());
    let tracker = LifecycleTracker::new(tickets.clone(), orders);

    let err = tracker
        .transition(&pending_ticket(), TicketStatus::Ready)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Invalid ticket transition"));
    assert!(tickets.status_calls.lock().is_empty());
}

#[tokio::test]
async fn advancing_sent_ticket_reports_already_terminal() {
    let tickets = Arc::new(MockTickets::default());
    let orders = Arc::new(MockOrders::default());
    let tracker = LifecycleTracker::new(tickets.clone(), orders);

    let mut ticket = pending_ticket();
    ticket.status = TicketStatus::Sent;

    let err = tracker.advance(&ticket).await.unwrap_err();
    assert_eq!(err.to_string(), "Ticket KOT-1 is already sent");
    assert!(tickets.status_calls.lock().is_empty());
}

#[tokio::test]
async fn board_narrows_to_a_single_order() {
    let tickets = Arc::new(MockTickets::default());
    {
        let mine = pending_ticket();
        let mut other = pending_ticket();
        other.id = "tic-2".to_string();
        other.order_id = "64a1f2c3d4e5f60718293a4c".to_string();
        tickets.stored.lock().extend([mine, other]);
    }

    let board = KotBoard::new(tickets);
    let visible = board
        .refresh_for_order("64a1f2c3d4e5f60718293a4b")
        .await
        .unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "tic-1");
}

#[tokio::test]
async fn ready_to_sent_has_no_order_side_effect() {
    let tickets = Arc::new(MockTickets::default());
    let orders = Arc::new(MockOrders::default());
    let tracker = LifecycleTracker::new(tickets, orders.clone());

    let mut ticket = pending_ticket();
    ticket.status = TicketStatus::Ready;
    tracker.advance(&ticket).await.unwrap();
    assert!(orders.status_calls.lock().is_empty());
}
