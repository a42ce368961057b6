use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tripdesk_core::{CoreError, FlightQuery, HotelQuery};
use tripdesk_shared::{Flight, Hotel};

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights", get(search_flights))
        .route("/v1/flights/{id}", get(get_flight))
        .route("/v1/hotels", get(search_hotels))
        .route("/v1/hotels/{id}", get(get_hotel))
}

async fn search_flights(
    State(state): State<AppState>,
    Query(query): Query<FlightQuery>,
) -> Result<Json<Vec<Flight>>, AppError> {
    let flights = state.search.search_flights(&query.origin, &query.destination).await?;
    Ok(Json(flights))
}

async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Flight>, AppError> {
    let flight = state
        .search
        .get_flight_by_id(&id)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("flight {}", id)))?;
    Ok(Json(flight))
}

async fn search_hotels(
    State(state): State<AppState>,
    Query(query): Query<HotelQuery>,
) -> Result<Json<Vec<Hotel>>, AppError> {
    let hotels = state.search.search_hotels(&query.location).await?;
    Ok(Json(hotels))
}

async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Hotel>, AppError> {
    let hotel = state
        .search
        .get_hotel_by_id(&id)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("hotel {}", id)))?;
    Ok(Json(hotel))
}
