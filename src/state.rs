use crate::auth::credentials::{CredentialStore, InMemoryCredentials};
use crate::config::AppConfig;
use crate::session::store::SessionStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub credentials: Arc<dyn CredentialStore>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let credentials = Arc::new(InMemoryCredentials::seeded()?) as Arc<dyn CredentialStore>;
        Ok(Self::from_parts(config, credentials))
    }

    pub fn from_parts(config: Arc<AppConfig>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            config,
            credentials,
            sessions: SessionStore::default(),
        }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            session: crate::config::SessionConfig {
                secret: "test".into(),
                issuer: "test-issuer".into(),
                audience: "test-aud".into(),
                ttl_minutes: 5,
            },
            embeds: crate::config::EmbedConfig {
                calendar_url: "https://calendar.example/embed".into(),
                sudoku_url: "https://sudoku.example/".into(),
                game_2048_url: "https://2048.example/".into(),
            },
            chat_reply_delay_ms: 0,
        });
        let credentials =
            Arc::new(InMemoryCredentials::seeded().expect("seed credentials")) as Arc<dyn CredentialStore>;
        Self::from_parts(config, credentials)
    }
}
