use crate::handlers::{book, order, trades};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/quote", get(book::quote))
        .route("/api/book", get(book::snapshot))
        .route("/api/orders", post(order::create_order))
        .route("/api/orders/:id", delete(order::cancel_order))
        .route("/api/trades", get(trades::recent))
        .route("/api/stats", get(book::stats))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}
