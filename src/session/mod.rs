use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod store;
pub mod token;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::session_routes())
}
