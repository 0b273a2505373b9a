use axum::{extract::State, Json};
use types::trade::Trade;

use crate::state::AppState;

/// Recent trades, newest last.
pub async fn recent(State(state): State<AppState>) -> Json<Vec<Trade>> {
    Json(state.tape.recent())
}
