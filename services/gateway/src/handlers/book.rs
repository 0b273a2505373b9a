use axum::{extract::State, Json};
use types::order::Side;

use crate::models::{BookResponse, QuoteResponse, StatsResponse};
use crate::state::AppState;

/// L1 quote: best bid, best ask, and the spread when both exist.
pub async fn quote(State(state): State<AppState>) -> Json<QuoteResponse> {
    let book = state.engine.book();
    let best_bid = book.best_bid();
    let best_ask = book.best_ask();
    let spread = match (best_bid, best_ask) {
        (Some(bid), Some(ask)) => Some(ask.ticks() - bid.ticks()),
        _ => None,
    };

    Json(QuoteResponse {
        best_bid,
        best_ask,
        spread,
    })
}

/// L2 snapshot: bids descending, asks ascending.
pub async fn snapshot(State(state): State<AppState>) -> Json<BookResponse> {
    let book = state.engine.book();
    Json(BookResponse {
        bids: book.depth(Side::Buy).into_iter().map(Into::into).collect(),
        asks: book.depth(Side::Sell).into_iter().map(Into::into).collect(),
    })
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let book = state.engine.book();
    let pool = book.pool();
    Json(StatsResponse {
        pool_capacity: pool.capacity(),
        pool_available: pool.available(),
        pool_in_use: pool.in_use(),
        active_orders: book.index().len(),
        bid_levels: book.level_count(Side::Buy),
        ask_levels: book.level_count(Side::Sell),
        recent_trades: state.tape.len(),
    })
}
