//! Order Submission Coordinator

use std::sync::Arc;

use tracing::{debug, error, info};

use shared::OrderService;
use shared::order::{Channel, ConfirmedOrder, OrderDraft, SessionContext};
use shared::service::{OrderPayload, PayloadLine};

use crate::config::EngineConfig;
use crate::pricing;
use crate::tables::TableSynchronizer;
use crate::utils::error::{SubmitError, ValidationReport};
use crate::utils::validation;

/// Submits validated drafts to the Order Service
///
/// Validation happens entirely before any network call and surfaces one
/// aggregated message. Each call is exactly one submission attempt - the
/// coordinator performs no retries.
pub struct OrderCoordinator {
    orders: Arc<dyn OrderService>,
    tables: Option<Arc<TableSynchronizer>>,
    config: EngineConfig,
}

impl OrderCoordinator {
    pub fn new(orders: Arc<dyn OrderService>, config: EngineConfig) -> Self {
        Self {
            orders,
            tables: None,
            config,
        }
    }

    /// Attach the table synchronizer invoked after table-carrying orders
    pub fn with_table_sync(mut self, tables: Arc<TableSynchronizer>) -> Self {
        self.tables = Some(tables);
        self
    }

    /// Validate, normalize and submit a draft
    ///
    /// On success the draft is cleared and, for channels carrying a table
    /// number, the table is marked serving (best-effort). On failure the
    /// draft is left untouched so the user can correct and resubmit.
    pub async fn submit(
        &self,
        draft: &mut OrderDraft,
        session: &SessionContext,
    ) -> Result<ConfirmedOrder, SubmitError> {
        validate_draft(draft)?;

        let payload = build_payload(draft, session);
        let totals = pricing::compute_totals(&draft.lines, draft.discount.as_ref(), &self.config);

        let created = match self.orders.create_order(&payload).await {
            Ok(created) => created,
            Err(e) => {
                error!(channel = ?draft.channel, error = %e, "Order submission failed");
                return Err(SubmitError::classify(e));
            }
        };

        info!(
            order_id = %created.id,
            order_number = %created.order_number,
            channel = ?draft.channel,
            total = totals.total,
            "Order confirmed"
        );

        let confirmed = ConfirmedOrder {
            id: created.id,
            order_number: created.order_number,
            channel: draft.channel,
            table_number: draft.table_number,
            totals,
            created_at: chrono::Utc::now().timestamp_millis(),
        };

        if let (Some(tables), Some(table_number)) = (&self.tables, confirmed.table_number)
            && confirmed.channel.uses_table()
        {
            tables.mark_serving(table_number).await;
        }

        draft.clear();
        Ok(confirmed)
    }
}

/// Channel-specific validation, aggregated into a single report
fn validate_draft(draft: &OrderDraft) -> Result<(), SubmitError> {
    let mut report = ValidationReport::default();

    if draft.lines.is_empty() {
        report.push("cart", "must contain at least one item");
    }

    match draft.channel {
        Channel::DineIn => {
            validation::require_table_number(&mut report, draft.table_number, "table_number");
        }
        Channel::Takeaway => {
            validation::require_table_number(&mut report, draft.table_number, "table_number");
            validation::require_text(
                &mut report,
                draft.customer_name.as_deref(),
                "customer_name",
                validation::MAX_NAME_LEN,
            );
            let phone = draft.delivery.as_ref().map(|d| d.phone.as_str());
            validation::require_text(&mut report, phone, "customer_phone", validation::MAX_NAME_LEN);
        }
        Channel::Phone | Channel::Online => {
            validation::require_text(
                &mut report,
                draft.customer_name.as_deref(),
                "customer_name",
                validation::MAX_NAME_LEN,
            );
            let delivery = draft.delivery.as_ref();
            validation::require_text(
                &mut report,
                delivery.map(|d| d.phone.as_str()),
                "delivery.phone",
                validation::MAX_NAME_LEN,
            );
            validation::require_text(
                &mut report,
                delivery.map(|d| d.address.as_str()),
                "delivery.address",
                validation::MAX_ADDRESS_LEN,
            );
        }
    }

    // Defensive re-validation; the cart aggregator already guarantees this
    for (idx, line) in draft.lines.iter().enumerate() {
        validation::check_line(&mut report, idx, line);
    }

    report.into_result()
}

/// Normalize the draft into the wire shape
///
/// External refs that do not match the backend identifier shape are treated
/// as unset rather than failing the submission.
fn build_payload(draft: &OrderDraft, session: &SessionContext) -> OrderPayload {
    let items = draft
        .lines
        .iter()
        .map(|line| PayloadLine {
            name: line.name.clone(),
            quantity: line.quantity,
            price: line.unit_price,
            instructions: line.special_instructions.clone(),
        })
        .collect();

    let waiter_ref = draft
        .waiter_ref
        .clone()
        .or_else(|| session.waiter.as_ref().and_then(|w| w.id.clone()));

    OrderPayload {
        channel: draft.channel,
        items,
        table_number: draft.table_number,
        customer_name: draft.customer_name.clone(),
        customer_ref: sanitize_ref(draft.customer_ref.as_deref(), "customer_ref"),
        delivery: draft.delivery.clone(),
        waiter_ref: sanitize_ref(waiter_ref.as_deref(), "waiter_ref"),
        notes: draft.notes.clone(),
        discount: draft.discount.clone(),
        operator_id: session.operator_id.clone(),
        operator_name: session.operator_name.clone(),
    }
}

fn sanitize_ref(value: Option<&str>, field: &str) -> Option<String> {
    match value {
        Some(v) if validation::is_object_ref(v) => Some(v.to_string()),
        Some(v) => {
            debug!(field, value = v, "Dropping malformed external ref");
            None
        }
        None => None,
    }
}
