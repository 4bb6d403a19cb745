use axum::{
    routing::get,
    Router,
};

use crate::modules::users::handlers;
use crate::shared::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_me).put(handlers::update_me))
        .route(
            "/alamat",
            get(handlers::list_alamat).post(handlers::create_alamat),
        )
        .route(
            "/alamat/:id",
            get(handlers::get_alamat)
                .put(handlers::update_alamat)
                .delete(handlers::delete_alamat),
        )
}
