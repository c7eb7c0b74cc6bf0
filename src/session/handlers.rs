use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{SessionEnvelope, SessionSnapshot},
    extractors::CurrentSession,
    token::SessionKeys,
};
use crate::{error::AppError, state::AppState};

pub fn session_routes() -> Router<AppState> {
    Router::new().route("/session", get(snapshot).post(open_session))
}

#[instrument(skip(state))]
pub async fn open_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionEnvelope>), AppError> {
    let (id, session) = state.sessions.open().await;
    let token = SessionKeys::from_ref(&state).sign(id)?;
    let snapshot = SessionSnapshot::from(&*session.lock().await);

    info!(session_id = %id, "session opened");
    Ok((
        StatusCode::CREATED,
        Json(SessionEnvelope {
            token,
            session: snapshot,
        }),
    ))
}

#[instrument(skip(state, current), fields(session_id = %current.id))]
pub async fn snapshot(
    State(state): State<AppState>,
    current: CurrentSession,
) -> Result<Json<SessionEnvelope>, AppError> {
    let id = current.id;
    let session = current.lock().await;
    // fresh expiry on every read
    let token = SessionKeys::from_ref(&state).sign(id)?;
    Ok(Json(SessionEnvelope {
        token,
        session: SessionSnapshot::from(&*session),
    }))
}
