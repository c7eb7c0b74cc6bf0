use serde::Serialize;

use super::model::Session;
use crate::{
    chat::model::ChatTurn,
    community::model::CommunityPost,
    family::model::{FamilyMember, Task},
    journal::model::JournalEntry,
};

/// Full read view of a session.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub logged_in: bool,
    pub current_user: Option<String>,
    pub family_members: Vec<FamilyMember>,
    pub tasks: Vec<Task>,
    pub journals: Vec<JournalEntry>,
    pub chat_history: Vec<ChatTurn>,
    pub community_posts: Vec<CommunityPost>,
}

impl From<&Session> for SessionSnapshot {
    fn from(s: &Session) -> Self {
        Self {
            logged_in: s.logged_in(),
            current_user: s.current_user().map(str::to_owned),
            family_members: s.family_members.clone(),
            tasks: s.tasks.clone(),
            journals: s.journals.clone(),
            chat_history: s.chat_history.clone(),
            community_posts: s.community_posts.clone(),
        }
    }
}

/// Session state plus a freshly signed token. Clients replace their stored
/// token with this one, which keeps an active session from expiring.
#[derive(Debug, Serialize)]
pub struct SessionEnvelope {
    pub token: String,
    pub session: SessionSnapshot,
}
