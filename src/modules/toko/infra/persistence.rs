use async_trait::async_trait;
use sea_orm::*;

use crate::modules::toko::entities::toko;
use crate::modules::toko::repository::TokoRepository;
use crate::shared::error::{AppError, AppResult};
use crate::shared::infra::repository::{now, InMemoryRepository, SeaOrmRepository};

// =========================================================================
// Postgres Implementation
// =========================================================================

pub type PostgresTokoRepository = SeaOrmRepository<toko::Entity>;

#[async_trait]
impl TokoRepository for PostgresTokoRepository {
    async fn find_all(&self) -> AppResult<Vec<toko::Model>> {
        toko::Entity::find()
            .order_by_asc(toko::Column::Id)
            .all(self.db())
            .await
            .map_err(AppError::DbError)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<toko::Model>> {
        toko::Entity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(AppError::DbError)
    }

    async fn find_by_user_id(&self, id_user: i32) -> AppResult<Option<toko::Model>> {
        toko::Entity::find()
            .filter(toko::Column::IdUser.eq(id_user))
            .one(self.db())
            .await
            .map_err(AppError::DbError)
    }

    async fn update(&self, mut toko: toko::ActiveModel) -> AppResult<toko::Model> {
        toko.updated_at = Set(now());
        toko.update(self.db()).await.map_err(AppError::DbError)
    }
}

// =========================================================================
// InMemory Implementation
// =========================================================================

pub type InMemoryTokoRepository = InMemoryRepository<toko::Entity>;

#[async_trait]
impl TokoRepository for InMemoryTokoRepository {
    async fn find_all(&self) -> AppResult<Vec<toko::Model>> {
        let tables = self.db.lock()?;
        Ok(tables.toko.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<toko::Model>> {
        let tables = self.db.lock()?;
        Ok(tables.toko.get(&id).cloned())
    }

    async fn find_by_user_id(&self, id_user: i32) -> AppResult<Option<toko::Model>> {
        let tables = self.db.lock()?;
        Ok(tables.toko.values().find(|t| t.id_user == id_user).cloned())
    }

    async fn update(&self, mut toko: toko::ActiveModel) -> AppResult<toko::Model> {
        let mut tables = self.db.lock()?;
        toko.updated_at = Set(now());
        let model = toko.try_into_model()?;

        match tables.toko.get_mut(&model.id) {
            Some(existing) => {
                *existing = model.clone();
                Ok(model)
            }
            None => Err(AppError::NotFound("toko not found".to_string())),
        }
    }
}
