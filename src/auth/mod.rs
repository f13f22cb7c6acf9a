use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod provider;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
