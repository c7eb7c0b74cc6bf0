use axum::{http::StatusCode, routing::get, Json, Router};
use tracing::instrument;

use super::{
    dto::{CreatePostRequest, PostCreated},
    model::CommunityPost,
    services::{self, POSTED_NOTICE},
};
use crate::{error::AppError, session::extractors::CurrentSession, state::AppState};

pub fn community_routes() -> Router<AppState> {
    Router::new().route("/community/posts", get(list_posts).post(create_post))
}

#[instrument(skip(current), fields(session_id = %current.id))]
pub async fn list_posts(current: CurrentSession) -> Result<Json<Vec<CommunityPost>>, AppError> {
    let session = current.lock().await;
    session.require_user()?;
    Ok(Json(session.community_posts.clone()))
}

#[instrument(skip(current, payload), fields(session_id = %current.id))]
pub async fn create_post(
    current: CurrentSession,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostCreated>), AppError> {
    let mut session = current.lock().await;
    let post = services::create_post(&mut session, &payload.content)?;
    Ok((
        StatusCode::CREATED,
        Json(PostCreated {
            notice: POSTED_NOTICE.to_string(),
            post,
        }),
    ))
}
