use axum::{
    extract::{Path, State},
    Json,
};
use types::ids::OrderId;
use types::numeric::Quantity;

use crate::error::AppError;
use crate::models::{CancelResponse, OrderRequest, OrderResponse, OrderStatus};
use crate::state::AppState;

pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderRequest>,
) -> Result<Json<OrderResponse>, AppError> {
    let order_id = payload.order_id.unwrap_or_else(|| state.next_order_id());

    let trades = state.engine.process_order(
        OrderId::new(order_id),
        payload.side,
        payload.price,
        payload.quantity,
    )?;

    let traded: u64 = trades.iter().map(|t| t.quantity.raw()).sum();
    let status = if trades.is_empty() {
        OrderStatus::Accepted
    } else {
        OrderStatus::Matched
    };

    Ok(Json(OrderResponse {
        order_id,
        status,
        trades_count: trades.len(),
        remaining_quantity: payload.quantity - Quantity::new(traded),
    }))
}

pub async fn cancel_order(
    State(state): State<AppState>,
    Path(order_id): Path<u64>,
) -> Result<Json<CancelResponse>, AppError> {
    if state.engine.cancel_order(OrderId::new(order_id)) {
        Ok(Json(CancelResponse {
            status: "CANCELLED",
            order_id,
        }))
    } else {
        Err(AppError::NotFound(format!("Order not found: {order_id}")))
    }
}
