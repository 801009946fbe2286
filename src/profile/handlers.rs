use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{
    profile::{dto::ProfileResponse, services::profile_response},
    state::AppState,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_profile))
}

/// GET /me. Always 200; store and fact failures only change the payload.
#[instrument(skip(state))]
pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileResponse> {
    Json(profile_response(&state).await)
}
