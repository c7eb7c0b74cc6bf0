use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::instrument;

use super::{
    dto::{ChatExchange, SubmitMessageRequest},
    model::ChatTurn,
    services,
};
use crate::{error::AppError, session::extractors::CurrentSession, state::AppState};

pub fn chat_routes() -> Router<AppState> {
    Router::new().route(
        "/chat",
        get(history).post(submit_message).delete(clear_history),
    )
}

#[instrument(skip(current), fields(session_id = %current.id))]
pub async fn history(current: CurrentSession) -> Result<Json<Vec<ChatTurn>>, AppError> {
    let session = current.lock().await;
    session.require_user()?;
    Ok(Json(session.chat_history.clone()))
}

#[instrument(skip(state, current, payload), fields(session_id = %current.id))]
pub async fn submit_message(
    State(state): State<AppState>,
    current: CurrentSession,
    Json(payload): Json<SubmitMessageRequest>,
) -> Result<(StatusCode, Json<ChatExchange>), AppError> {
    let delay = Duration::from_millis(state.config.chat_reply_delay_ms);
    let mut session = current.lock().await;
    let (user, assistant) = services::submit_message(&mut session, &payload.message, delay).await?;
    Ok((StatusCode::CREATED, Json(ChatExchange { user, assistant })))
}

#[instrument(skip(current), fields(session_id = %current.id))]
pub async fn clear_history(current: CurrentSession) -> Result<StatusCode, AppError> {
    let mut session = current.lock().await;
    services::clear_history(&mut session)?;
    Ok(StatusCode::NO_CONTENT)
}
