use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use super::{dto::Dashboard, services};
use crate::{error::AppError, session::extractors::CurrentSession, state::AppState};

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

#[instrument(skip(state, current), fields(session_id = %current.id))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    current: CurrentSession,
) -> Result<Json<Dashboard>, AppError> {
    let session = current.lock().await;
    Ok(Json(services::dashboard(&session, &state.config.embeds)?))
}
