use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::shared::config::Config;
use crate::shared::infra::repository::InMemoryDatabase;
use crate::shared::repository::Repositories;

pub fn init_repositories(config: &Config, db: Option<DatabaseConnection>) -> Repositories {
    match db {
        Some(db) => {
            tracing::info!("Using SeaORM repositories ({})", config.db_driver);
            Repositories::sea_orm(Arc::new(db))
        }
        None => {
            tracing::warn!("Using in-memory repositories, data is lost on restart");
            Repositories::in_memory(InMemoryDatabase::new())
        }
    }
}
