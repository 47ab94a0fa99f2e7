//! Table Service over REST

use async_trait::async_trait;
use serde::Serialize;

use shared::models::{TableRef, TableStatus};
use shared::service::{TableQuery, TableService};
use shared::ServiceResult;

use crate::http::{ApiResponse, HttpClient};

/// `TableService` implementation against `/api/tables`
#[derive(Debug, Clone)]
pub struct TablesApi {
    http: HttpClient,
}

impl TablesApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[derive(Serialize)]
struct StatusBody {
    status: TableStatus,
}

#[async_trait]
impl TableService for TablesApi {
    async fn list_tables(&self, query: &TableQuery) -> ServiceResult<Vec<TableRef>> {
        let response: ApiResponse<Vec<TableRef>> = self
            .http
            .get("/api/tables", query)
            .await
            .map_err(shared::ServiceError::from)?;
        Ok(response.data.unwrap_or_default())
    }

    async fn set_table_status(&self, table_id: &str, status: TableStatus) -> ServiceResult<()> {
        let _: ApiResponse<serde_json::Value> = self
            .http
            .patch(&format!("/api/tables/{table_id}/status"), &StatusBody { status })
            .await
            .map_err(shared::ServiceError::from)?;
        Ok(())
    }
}
