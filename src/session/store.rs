use std::{collections::HashMap, sync::Arc};

use time::{Duration, OffsetDateTime};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

use super::model::Session;

pub type SharedSession = Arc<Mutex<Session>>;

/// Live sessions keyed by id. Each session has its own lock so that one
/// submission is handled to completion before the next one on that session.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, SharedSession>>>,
}

impl SessionStore {
    pub async fn open(&self) -> (Uuid, SharedSession) {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(Session::new(OffsetDateTime::now_utc())));
        self.inner.write().await.insert(id, session.clone());
        debug!(session_id = %id, "session opened");
        (id, session)
    }

    pub async fn get(&self, id: Uuid) -> Option<SharedSession> {
        self.inner.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Drops sessions untouched for longer than `max_idle`. Sessions busy
    /// with a request are kept.
    pub async fn prune_idle(&self, max_idle: Duration, now: OffsetDateTime) -> usize {
        let cutoff = now - max_idle;
        let mut map = self.inner.write().await;
        let before = map.len();
        map.retain(|_, session| match session.try_lock() {
            Ok(s) => s.touched_at() >= cutoff,
            Err(_) => true,
        });
        before - map.len()
    }
}
