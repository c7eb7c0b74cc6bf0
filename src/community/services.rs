use tracing::info;

use super::model::CommunityPost;
use crate::{error::AppError, session::model::Session};

pub const POSTED_NOTICE: &str = "Posted!";
pub const FRESH_POST_TIME: &str = "Just now";

pub fn create_post(session: &mut Session, content: &str) -> Result<CommunityPost, AppError> {
    let user = session.require_user()?.to_string();
    if content.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let post = CommunityPost {
        user,
        time: FRESH_POST_TIME.to_string(),
        content: content.to_string(),
    };
    session.community_posts.insert(0, post.clone());
    info!(user = %post.user, "community post created");
    Ok(post)
}
