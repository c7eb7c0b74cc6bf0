use axum::{http::StatusCode, routing::get, Json, Router};
use time::OffsetDateTime;
use tracing::instrument;

use super::{
    dto::{EntrySaved, SaveEntryRequest},
    model::JournalEntry,
    services::{self, SAVED_NOTICE},
};
use crate::{error::AppError, session::extractors::CurrentSession, state::AppState};

pub fn journal_routes() -> Router<AppState> {
    Router::new().route("/journal", get(list_entries).post(save_entry))
}

#[instrument(skip(current), fields(session_id = %current.id))]
pub async fn list_entries(current: CurrentSession) -> Result<Json<Vec<JournalEntry>>, AppError> {
    let session = current.lock().await;
    session.require_user()?;
    Ok(Json(session.journals.clone()))
}

#[instrument(skip(current, payload), fields(session_id = %current.id))]
pub async fn save_entry(
    current: CurrentSession,
    Json(payload): Json<SaveEntryRequest>,
) -> Result<(StatusCode, Json<EntrySaved>), AppError> {
    let mut session = current.lock().await;
    let entry = services::save_entry(&mut session, OffsetDateTime::now_utc(), &payload.content)?;
    Ok((
        StatusCode::CREATED,
        Json(EntrySaved {
            notice: SAVED_NOTICE.to_string(),
            entry,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn saved_entry_is_listed_first() {
        let state = AppState::fake();
        let (id, shared) = state.sessions.open().await;
        shared.lock().await.sign_in("demo_mom");

        let (status, Json(saved)) = save_entry(
            CurrentSession { id, session: shared.clone() },
            Json(SaveEntryRequest { content: "feeling okay".into() }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(saved.notice, SAVED_NOTICE);

        let Json(entries) = list_entries(CurrentSession { id, session: shared }).await.unwrap();
        assert_eq!(entries[0], saved.entry);
    }

    #[tokio::test]
    async fn logged_out_session_cannot_read_journal() {
        let state = AppState::fake();
        let (id, session) = state.sessions.open().await;
        let err = list_entries(CurrentSession { id, session }).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }
}
