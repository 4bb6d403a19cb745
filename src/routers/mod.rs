use axum::{Router, routing::get};
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};

use crate::modules::{auth, category, product, toko, trx, users};
use crate::shared::{handlers, state::AppState};

pub fn init_router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config.upload_dir);

    let api = Router::new()
        .nest("/auth", auth::router::router())
        .nest("/user", users::router::router())
        .nest("/category", category::router::router())
        .nest("/toko", toko::router::router())
        .nest("/product", product::router::router())
        .nest("/trx", trx::router::router());

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api)
        .nest_service("/uploads", uploads)
        .fallback(handlers::handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handlers::handler_500))
        .with_state(state)
}
