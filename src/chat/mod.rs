mod dto;
pub mod handlers;
pub mod model;
pub mod responder;
mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::chat_routes())
}
