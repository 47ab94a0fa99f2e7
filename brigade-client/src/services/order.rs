//! Order Service over REST

use async_trait::async_trait;
use serde::Serialize;

use shared::service::{CreatedOrder, OrderPayload, OrderService};
use shared::{ServiceResult, order::OrderStatus};

use crate::http::{ApiResponse, HttpClient};

/// `OrderService` implementation against `/api/orders`
#[derive(Debug, Clone)]
pub struct OrdersApi {
    http: HttpClient,
}

impl OrdersApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[derive(Serialize)]
struct StatusBody {
    status: OrderStatus,
}

#[async_trait]
impl OrderService for OrdersApi {
    async fn create_order(&self, payload: &OrderPayload) -> ServiceResult<CreatedOrder> {
        let response: ApiResponse<CreatedOrder> = self
            .http
            .post("/api/orders", payload)
            .await
            .map_err(shared::ServiceError::from)?;
        Ok(response.into_data("order")?)
    }

    async fn update_order(&self, order_id: &str, payload: &OrderPayload) -> ServiceResult<()> {
        let _: ApiResponse<serde_json::Value> = self
            .http
            .put(&format!("/api/orders/{order_id}"), payload)
            .await
            .map_err(shared::ServiceError::from)?;
        Ok(())
    }

    async fn set_order_status(&self, order_id: &str, status: OrderStatus) -> ServiceResult<()> {
        let _: ApiResponse<serde_json::Value> = self
            .http
            .patch(&format!("/api/orders/{order_id}/status"), &StatusBody { status })
            .await
            .map_err(shared::ServiceError::from)?;
        Ok(())
    }
}
