//! Order HTTP handlers

use super::{NewOrder, Order, OrderPatch, OrderService};
use crate::core::{ApiResponse, CafeError, EntityId, Payload};
use axum::extract::State;

/// Order-specific AppState
#[derive(Clone)]
pub struct OrderAppState {
    pub service: OrderService,
}

pub async fn create_order(
    State(state): State<OrderAppState>,
    Payload(payload): Payload<NewOrder>,
) -> Result<ApiResponse<Order>, CafeError> {
    let order = state.service.create(payload).await?;
    Ok(ApiResponse::created(order, "Order created successfully"))
}

pub async fn list_orders(
    State(state): State<OrderAppState>,
) -> Result<ApiResponse<Vec<Order>>, CafeError> {
    Ok(ApiResponse::ok(state.service.list().await?))
}

pub async fn get_order(
    State(state): State<OrderAppState>,
    id: EntityId<Order>,
) -> Result<ApiResponse<Order>, CafeError> {
    Ok(ApiResponse::ok(state.service.get_by_id(&id).await?))
}

pub async fn update_order(
    State(state): State<OrderAppState>,
    id: EntityId<Order>,
    Payload(patch): Payload<OrderPatch>,
) -> Result<ApiResponse<Order>, CafeError> {
    let order = state.service.update(&id, patch).await?;
    Ok(ApiResponse::ok(order).with_message("Order updated"))
}

pub async fn delete_order(
    State(state): State<OrderAppState>,
    id: EntityId<Order>,
) -> Result<ApiResponse<()>, CafeError> {
    state.service.delete(&id).await?;
    Ok(ApiResponse::ok(()).with_message("Order deleted"))
}
