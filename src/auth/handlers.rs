use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::instrument;

use crate::{
    auth::{
        dto::{AuthStatus, CredentialsRequest},
        services::{self, LOGIN_NOTICE, SIGNUP_NOTICE},
    },
    error::AppError,
    session::{extractors::CurrentSession, model::Session},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

fn status(session: &Session, notice: Option<&str>) -> AuthStatus {
    AuthStatus {
        logged_in: session.logged_in(),
        current_user: session.current_user().map(str::to_owned),
        notice: notice.map(str::to_owned),
    }
}

#[instrument(skip(state, current, payload), fields(session_id = %current.id))]
pub async fn signup(
    State(state): State<AppState>,
    current: CurrentSession,
    Json(payload): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AuthStatus>), AppError> {
    // hashing runs before the session is locked
    services::signup(state.credentials.as_ref(), &payload.username, &payload.password).await?;
    let session = current.lock().await;
    Ok((
        StatusCode::CREATED,
        Json(status(&session, Some(SIGNUP_NOTICE))),
    ))
}

#[instrument(skip(state, current, payload), fields(session_id = %current.id))]
pub async fn login(
    State(state): State<AppState>,
    current: CurrentSession,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<AuthStatus>, AppError> {
    let mut session = current.lock().await;
    services::login(
        state.credentials.as_ref(),
        &mut session,
        &payload.username,
        &payload.password,
    )
    .await?;
    Ok(Json(status(&session, Some(LOGIN_NOTICE))))
}

#[instrument(skip(current), fields(session_id = %current.id))]
pub async fn logout(current: CurrentSession) -> Json<AuthStatus> {
    let mut session = current.lock().await;
    services::logout(&mut session);
    Json(status(&session, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credentials::{DEMO_PASSWORD, DEMO_USERNAME};

    async fn current(state: &AppState) -> CurrentSession {
        let (id, session) = state.sessions.open().await;
        CurrentSession { id, session }
    }

    fn creds(username: &str, password: &str) -> Json<CredentialsRequest> {
        Json(CredentialsRequest {
            username: username.into(),
            password: password.into(),
        })
    }

    #[tokio::test]
    async fn login_then_logout_round_trip() {
        let state = AppState::fake();
        let (id, shared) = state.sessions.open().await;

        let Json(res) = login(
            State(state.clone()),
            CurrentSession { id, session: shared.clone() },
            creds(DEMO_USERNAME, DEMO_PASSWORD),
        )
        .await
        .unwrap();
        assert!(res.logged_in);
        assert_eq!(res.current_user.as_deref(), Some(DEMO_USERNAME));
        assert_eq!(res.notice.as_deref(), Some(LOGIN_NOTICE));

        let Json(res) = logout(CurrentSession { id, session: shared.clone() }).await;
        assert!(!res.logged_in);
        assert!(!shared.lock().await.logged_in());
    }

    #[tokio::test]
    async fn failed_login_maps_to_unauthorized() {
        let state = AppState::fake();
        let err = login(
            State(state.clone()),
            current(&state).await,
            creds(DEMO_USERNAME, "wrong"),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn accounts_are_visible_across_sessions() {
        let state = AppState::fake();
        let (status_code, Json(res)) = signup(
            State(state.clone()),
            current(&state).await,
            creds("validuser", "longenough1"),
        )
        .await
        .unwrap();
        assert_eq!(status_code, StatusCode::CREATED);
        assert!(!res.logged_in);

        let Json(res) = login(
            State(state.clone()),
            current(&state).await,
            creds("validuser", "longenough1"),
        )
        .await
        .unwrap();
        assert_eq!(res.current_user.as_deref(), Some("validuser"));
    }

    #[tokio::test]
    async fn signup_does_not_wait_on_a_busy_session() {
        let state = AppState::fake();
        let (id, shared) = state.sessions.open().await;
        let busy = shared.clone().lock_owned().await;

        let task = tokio::spawn(signup(
            State(state.clone()),
            CurrentSession { id, session: shared },
            creds("validuser", "longenough1"),
        ));

        // the account lands while another request still holds the session
        let registered = tokio::time::timeout(std::time::Duration::from_secs(10), async {
            loop {
                if state.credentials.find_user("validuser").await.unwrap().is_some() {
                    break;
                }
                tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            }
        })
        .await;
        assert!(registered.is_ok());

        drop(busy);
        let (code, _) = task.await.unwrap().unwrap();
        assert_eq!(code, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn duplicate_signup_maps_to_conflict() {
        let state = AppState::fake();
        let err = signup(
            State(state.clone()),
            current(&state).await,
            creds(DEMO_USERNAME, "whatever1"),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }
}
