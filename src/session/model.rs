use time::OffsetDateTime;

use crate::{
    chat::model::ChatTurn,
    community::model::{seed_posts, CommunityPost},
    error::AppError,
    family::model::{FamilyMember, Task},
    journal::model::JournalEntry,
};

/// Everything one browser session knows about: who is signed in and all of
/// the collections entered through the dashboard.
#[derive(Debug, Clone)]
pub struct Session {
    logged_in: bool,
    current_user: Option<String>,
    pub family_members: Vec<FamilyMember>,
    pub tasks: Vec<Task>,
    /// Newest first.
    pub journals: Vec<JournalEntry>,
    pub chat_history: Vec<ChatTurn>,
    /// Newest first.
    pub community_posts: Vec<CommunityPost>,
    last_task_stamp: i128,
    touched_at: OffsetDateTime,
}

impl Session {
    pub fn new(now: OffsetDateTime) -> Self {
        Self {
            logged_in: false,
            current_user: None,
            family_members: Vec::new(),
            tasks: Vec::new(),
            journals: Vec::new(),
            chat_history: Vec::new(),
            community_posts: seed_posts(),
            last_task_stamp: 0,
            touched_at: now,
        }
    }

    pub fn logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    // logged_in and current_user only change together
    pub fn sign_in(&mut self, username: impl Into<String>) {
        self.logged_in = true;
        self.current_user = Some(username.into());
    }

    pub fn sign_out(&mut self) {
        self.logged_in = false;
        self.current_user = None;
    }

    /// The signed-in username, or `NotAuthenticated` for a logged-out session.
    pub fn require_user(&self) -> Result<&str, AppError> {
        match (self.logged_in, self.current_user.as_deref()) {
            (true, Some(user)) => Ok(user),
            _ => Err(AppError::NotAuthenticated),
        }
    }

    pub fn touch(&mut self, now: OffsetDateTime) {
        self.touched_at = now;
    }

    pub fn touched_at(&self) -> OffsetDateTime {
        self.touched_at
    }

    /// Task ids are creation timestamps in nanoseconds, bumped so they stay
    /// strictly increasing within the session even when the clock does not.
    pub fn next_task_id(&mut self, now: OffsetDateTime) -> String {
        let stamp = now.unix_timestamp_nanos().max(self.last_task_stamp + 1);
        self.last_task_stamp = stamp;
        stamp.to_string()
    }
}
