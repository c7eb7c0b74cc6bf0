use crate::state::AppState;
use axum::Router;

mod dto;
pub mod credentials;
pub mod handlers;
pub mod password;
pub mod services;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}
