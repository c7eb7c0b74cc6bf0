use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use time::OffsetDateTime;
use tokio::sync::OwnedMutexGuard;
use tracing::warn;
use uuid::Uuid;

use super::{model::Session, store::SharedSession, token::SessionKeys};
use crate::{error::AppError, state::AppState};

/// Resolves the bearer session token to the live session it names.
pub struct CurrentSession {
    pub id: Uuid,
    pub session: SharedSession,
}

impl CurrentSession {
    /// Locks the session for the rest of the request and marks it active.
    pub async fn lock(self) -> OwnedMutexGuard<Session> {
        let mut guard = self.session.lock_owned().await;
        guard.touch(OffsetDateTime::now_utc());
        guard
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AppError::InvalidSession)?;

        // Expect "Bearer <token>"
        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or(AppError::InvalidSession)?;

        let keys = SessionKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|e| {
            warn!(error = %e, "invalid or expired session token");
            AppError::InvalidSession
        })?;

        let session = state.sessions.get(claims.sub).await.ok_or_else(|| {
            warn!(session_id = %claims.sub, "session expired or unknown");
            AppError::InvalidSession
        })?;

        Ok(CurrentSession {
            id: claims.sub,
            session,
        })
    }
}
