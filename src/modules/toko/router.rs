use super::handlers;
use crate::shared::state::AppState;
use axum::{Router, routing::get};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_tokos))
        .route("/my", get(handlers::get_my_toko))
        .route(
            "/:id_toko",
            get(handlers::get_toko).put(handlers::update_toko),
        )
}
