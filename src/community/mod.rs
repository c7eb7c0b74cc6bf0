mod dto;
pub mod handlers;
pub mod model;
mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::community_routes())
}
