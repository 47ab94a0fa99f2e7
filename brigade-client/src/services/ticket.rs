//! KOT Service over REST

use async_trait::async_trait;
use serde::Serialize;

use shared::kot::{KotTicket, TicketStatus};
use shared::service::{CreateTicketRequest, TicketQuery, TicketService};
use shared::ServiceResult;

use crate::http::{ApiResponse, HttpClient};

/// `TicketService` implementation against `/api/kots`
#[derive(Debug, Clone)]
pub struct TicketsApi {
    http: HttpClient,
}

impl TicketsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[derive(Serialize)]
struct StatusBody {
    status: TicketStatus,
}

#[derive(Serialize)]
struct PrintedBody<'a> {
    is_printed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    printed_by: Option<&'a str>,
}

#[async_trait]
impl TicketService for TicketsApi {
    async fn create_ticket(&self, request: &CreateTicketRequest) -> ServiceResult<KotTicket> {
        let response: ApiResponse<KotTicket> = self
            .http
            .post("/api/kots", request)
            .await
            .map_err(shared::ServiceError::from)?;
        Ok(response.into_data("ticket")?)
    }

    async fn list_tickets(&self, query: &TicketQuery) -> ServiceResult<Vec<KotTicket>> {
        let response: ApiResponse<Vec<KotTicket>> = self
            .http
            .get("/api/kots", query)
            .await
            .map_err(shared::ServiceError::from)?;
        Ok(response.data.unwrap_or_default())
    }

    async fn set_ticket_status(&self, ticket_id: &str, status: TicketStatus) -> ServiceResult<()> {
        let _: ApiResponse<serde_json::Value> = self
            .http
            .patch(&format!("/api/kots/{ticket_id}/status"), &StatusBody { status })
            .await
            .map_err(shared::ServiceError::from)?;
        Ok(())
    }

    async fn mark_printed(&self, ticket_id: &str, printed_by: Option<&str>) -> ServiceResult<()> {
        let body = PrintedBody {
            is_printed: true,
            printed_by,
        };
        let _: ApiResponse<serde_json::Value> = self
            .http
            .patch(&format!("/api/kots/{ticket_id}/printed"), &body)
            .await
            .map_err(shared::ServiceError::from)?;
        Ok(())
    }
}
