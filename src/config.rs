use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbedConfig {
    pub calendar_url: String,
    pub sudoku_url: String,
    pub game_2048_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub embeds: EmbedConfig,
    /// Pause before the chatbot's reply is recorded. Zero disables it.
    pub chat_reply_delay_ms: u64,
}

const DEFAULT_TTL_MINUTES: i64 = 60 * 12;
pub const MAX_TTL_MINUTES: i64 = 60 * 24 * 365;

/// Session lifetime in minutes, between 1 and one year.
pub fn parse_ttl_minutes(raw: Option<String>) -> anyhow::Result<i64> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_TTL_MINUTES);
    };
    let minutes: i64 = raw
        .trim()
        .parse()
        .with_context(|| format!("SESSION_TTL_MINUTES is not a number: {raw:?}"))?;
    if !(1..=MAX_TTL_MINUTES).contains(&minutes) {
        anyhow::bail!("SESSION_TTL_MINUTES must be between 1 and {MAX_TTL_MINUTES}, got {minutes}");
    }
    Ok(minutes)
}

const DEFAULT_CALENDAR_URL: &str = "https://calendar.google.com/calendar/embed?src=en.usa%23holiday%40group.v.calendar.google.com&ctz=America%2FNew_York";

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let session = SessionConfig {
            secret: std::env::var("SESSION_SECRET")?,
            issuer: std::env::var("SESSION_ISSUER").unwrap_or_else(|_| "momenta".into()),
            audience: std::env::var("SESSION_AUDIENCE").unwrap_or_else(|_| "momenta-web".into()),
            ttl_minutes: parse_ttl_minutes(std::env::var("SESSION_TTL_MINUTES").ok())?,
        };
        let embeds = EmbedConfig {
            calendar_url: std::env::var("CALENDAR_URL")
                .unwrap_or_else(|_| DEFAULT_CALENDAR_URL.into()),
            sudoku_url: std::env::var("SUDOKU_URL").unwrap_or_else(|_| "https://sudoku.com/".into()),
            game_2048_url: std::env::var("GAME_2048_URL")
                .unwrap_or_else(|_| "https://play2048.co/".into()),
        };
        let chat_reply_delay_ms = std::env::var("CHAT_REPLY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0);
        Ok(Self {
            session,
            embeds,
            chat_reply_delay_ms,
        })
    }
}
