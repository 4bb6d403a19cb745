pub mod database;
pub mod repositories;
pub mod services;

use crate::shared::{config::Config, error::AppResult, state::AppState};
use std::sync::Arc;

pub async fn create_app_state(config: &Config) -> AppResult<AppState> {
    let db = if config.is_dev() {
        None
    } else {
        let db = database::connect(config).await?;
        database::migrate(&db).await?;
        Some(db)
    };

    let repos = repositories::init_repositories(config, db);
    Ok(services::build_state(Arc::new(config.clone()), repos))
}
