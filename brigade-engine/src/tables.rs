//! Table Status Synchronizer
//!
//! After a dine-in/takeaway order is confirmed with a table number, the
//! matching table transitions to `Serving`. Fire-and-forget: failure to
//! locate or update the table is logged, never surfaced, and does not
//! affect order success.

use std::sync::Arc;

use tracing::{info, warn};

use shared::TableService;
use shared::models::TableStatus;
use shared::service::TableQuery;

/// Best-effort table occupancy updater
pub struct TableSynchronizer {
    tables: Arc<dyn TableService>,
}

impl TableSynchronizer {
    pub fn new(tables: Arc<dyn TableService>) -> Self {
        Self { tables }
    }

    /// Mark the table with the given number as serving
    pub async fn mark_serving(&self, table_number: u32) {
        let query = TableQuery {
            table_number: Some(table_number),
        };

        let table = match self.tables.list_tables(&query).await {
            Ok(tables) => tables.into_iter().find(|t| t.table_number == table_number),
            Err(e) => {
                warn!(table_number, error = %e, "Table lookup failed, skipping occupancy update");
                return;
            }
        };

        let Some(table) = table else {
            warn!(table_number, "No matching table, skipping occupancy update");
            return;
        };

        match self
            .tables
            .set_table_status(&table.id, TableStatus::Serving)
            .await
        {
            Ok(()) => info!(table_number, table_id = %table.id, "Table marked serving"),
            Err(e) => {
                warn!(table_number, error = %e, "Table status update failed, continuing")
            }
        }
    }
}
