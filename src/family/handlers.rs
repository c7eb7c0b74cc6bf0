use axum::{
    extract::Path,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::instrument;

use super::{
    dto::{AddMemberRequest, AddTaskRequest, SetDoneRequest},
    model::{FamilyMember, Task},
    services,
};
use crate::{error::AppError, session::extractors::CurrentSession, state::AppState};

pub fn family_routes() -> Router<AppState> {
    Router::new()
        .route("/family/members", get(list_members).post(add_member))
        .route("/family/tasks", get(list_tasks).post(add_task))
        .route("/family/tasks/:id/done", put(set_task_done))
}

#[instrument(skip(current), fields(session_id = %current.id))]
pub async fn list_members(current: CurrentSession) -> Result<Json<Vec<FamilyMember>>, AppError> {
    let session = current.lock().await;
    session.require_user()?;
    Ok(Json(session.family_members.clone()))
}

#[instrument(skip(current, payload), fields(session_id = %current.id))]
pub async fn add_member(
    current: CurrentSession,
    Json(payload): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<FamilyMember>), AppError> {
    let mut session = current.lock().await;
    let member = services::add_member(&mut session, &payload.name, payload.designation)?;
    Ok((StatusCode::CREATED, Json(member)))
}

#[instrument(skip(current), fields(session_id = %current.id))]
pub async fn list_tasks(current: CurrentSession) -> Result<Json<Vec<Task>>, AppError> {
    let session = current.lock().await;
    session.require_user()?;
    Ok(Json(session.tasks.clone()))
}

#[instrument(skip(current, payload), fields(session_id = %current.id))]
pub async fn add_task(
    current: CurrentSession,
    Json(payload): Json<AddTaskRequest>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let mut session = current.lock().await;
    let task = services::add_task(
        &mut session,
        OffsetDateTime::now_utc(),
        &payload.description,
        &payload.assignee,
        payload.frequency,
    )?;
    Ok((StatusCode::CREATED, Json(task)))
}

#[instrument(skip(current, payload), fields(session_id = %current.id))]
pub async fn set_task_done(
    current: CurrentSession,
    Path(id): Path<String>,
    Json(payload): Json<SetDoneRequest>,
) -> Result<Json<Task>, AppError> {
    let mut session = current.lock().await;
    let task = services::set_task_done(&mut session, &id, payload.done)?;
    Ok(Json(task))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::model::{Designation, Frequency};

    async fn logged_in(state: &AppState) -> (uuid::Uuid, crate::session::store::SharedSession) {
        let (id, session) = state.sessions.open().await;
        session.lock().await.sign_in("demo_mom");
        (id, session)
    }

    #[tokio::test]
    async fn member_then_task_then_toggle() {
        let state = AppState::fake();
        let (id, shared) = logged_in(&state).await;
        let current = || CurrentSession { id, session: shared.clone() };

        let (status, Json(member)) = add_member(
            current(),
            Json(AddMemberRequest { name: "Mia".into(), designation: Designation::Child }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(member.name, "Mia");

        let (_, Json(task)) = add_task(
            current(),
            Json(AddTaskRequest {
                description: "Pack lunch".into(),
                assignee: "Mia".into(),
                frequency: Frequency::Daily,
            }),
        )
        .await
        .unwrap();
        assert!(!task.done);

        let Json(toggled) = set_task_done(
            current(),
            Path(task.id.clone()),
            Json(SetDoneRequest { done: true }),
        )
        .await
        .unwrap();
        assert!(toggled.done);

        let Json(tasks) = list_tasks(current()).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].done);
    }

    #[tokio::test]
    async fn blank_member_is_no_content() {
        let state = AppState::fake();
        let (id, session) = logged_in(&state).await;
        let err = add_member(
            CurrentSession { id, session },
            Json(AddMemberRequest { name: "".into(), designation: Designation::Other }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn request_accepts_wire_names() {
        let req: AddTaskRequest = serde_json::from_str(
            r#"{"description":"Vet","assignee":"Rex","frequency":"One-time"}"#,
        )
        .unwrap();
        assert_eq!(req.frequency, Frequency::OneTime);

        let req: AddMemberRequest =
            serde_json::from_str(r#"{"name":"Me","designation":"Self"}"#).unwrap();
        assert_eq!(req.designation, Designation::Myself);
    }
}
