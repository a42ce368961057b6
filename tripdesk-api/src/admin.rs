use axum::{extract::State, routing::get, Json, Router};
use tripdesk_shared::Booking;

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/admin/bookings", get(list_all_bookings))
}

/// Entire ledger, in insertion order
async fn list_all_bookings(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state.bookings.get_all().await?;
    Ok(Json(bookings))
}
