use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::info;
use tripdesk_ledger::{CheckoutRequest, SpendingSummary};
use tripdesk_shared::{Booking, BookingDraft};

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings", post(create_booking))
        .route("/v1/checkout", post(checkout))
        .route("/v1/users/{user_id}/bookings", get(list_user_bookings))
        .route("/v1/users/{user_id}/spending", get(spending_summary))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(draft): Json<BookingDraft>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = state.bookings.create(draft).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

async fn checkout(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    info!("Checkout: {} {} for user {}", req.item_type, req.item_id, req.user_id);
    let booking = state.checkout.checkout(req).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

async fn list_user_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state.bookings.get_by_user_id(&user_id).await?;
    Ok(Json(bookings))
}

async fn spending_summary(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<SpendingSummary>, AppError> {
    let summary = state.bookings.spending_summary(&user_id).await?;
    Ok(Json(summary))
}
