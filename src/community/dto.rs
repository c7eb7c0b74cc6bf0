use serde::{Deserialize, Serialize};

use super::model::CommunityPost;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct PostCreated {
    pub notice: String,
    pub post: CommunityPost,
}
