use super::handlers;
use crate::shared::state::AppState;
use axum::{Router, routing::get};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_trx).post(handlers::create_trx))
        .route("/:id", get(handlers::get_trx))
}
