use axum::{
    extract::State,
    Json,
    routing::post,
    Router,
};
use serde::Deserialize;
use tripdesk_core::AuthResponse;
use crate::{state::AppState, error::AppError};

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/auth/login", post(login))
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = state.auth.login(&req.email).await?;
    Ok(Json(response))
}
