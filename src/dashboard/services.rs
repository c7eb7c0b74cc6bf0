use super::dto::{Dashboard, Embed};
use crate::{config::EmbedConfig, error::AppError, session::model::Session};

pub const BRAIN_TIP: &str =
    "Hydration is key for neuroplasticity. Drink a glass of water right now!";

pub fn dashboard(session: &Session, embeds: &EmbedConfig) -> Result<Dashboard, AppError> {
    let user = session.require_user()?;
    Ok(Dashboard {
        welcome: format!("Welcome, {user}!"),
        brain_tip: BRAIN_TIP.to_string(),
        calendar: Embed {
            title: "Family Calendar".into(),
            url: embeds.calendar_url.clone(),
        },
        games: vec![
            Embed {
                title: "Sudoku".into(),
                url: embeds.sudoku_url.clone(),
            },
            Embed {
                title: "2048 (Logic Puzzle)".into(),
                url: embeds.game_2048_url.clone(),
            },
        ],
    })
}
