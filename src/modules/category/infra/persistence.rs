use async_trait::async_trait;
use sea_orm::*;

use crate::modules::category::entities::category;
use crate::modules::category::repository::CategoryRepository;
use crate::shared::error::{AppError, AppResult};
use crate::shared::infra::repository::{now, InMemoryRepository, SeaOrmRepository};

// =========================================================================
// Postgres Implementation
// =========================================================================

pub type PostgresCategoryRepository = SeaOrmRepository<category::Entity>;

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_all(&self) -> AppResult<Vec<category::Model>> {
        category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(self.db())
            .await
            .map_err(AppError::DbError)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<category::Model>> {
        category::Entity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(AppError::DbError)
    }

    async fn create(&self, mut category: category::ActiveModel) -> AppResult<category::Model> {
        let ts = now();
        category.created_at = Set(ts);
        category.updated_at = Set(ts);
        category.insert(self.db()).await.map_err(AppError::DbError)
    }

    async fn update(&self, mut category: category::ActiveModel) -> AppResult<category::Model> {
        category.updated_at = Set(now());
        category.update(self.db()).await.map_err(AppError::DbError)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        category::Entity::delete_by_id(id)
            .exec(self.db())
            .await
            .map_err(AppError::DbError)?;
        Ok(())
    }
}

// =========================================================================
// InMemory Implementation
// =========================================================================

pub type InMemoryCategoryRepository = InMemoryRepository<category::Entity>;

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> AppResult<Vec<category::Model>> {
        let tables = self.db.lock()?;
        Ok(tables.category.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<category::Model>> {
        let tables = self.db.lock()?;
        Ok(tables.category.get(&id).cloned())
    }

    async fn create(&self, mut category: category::ActiveModel) -> AppResult<category::Model> {
        let mut tables = self.db.lock()?;
        let ts = now();
        category.id = Set(tables.next_id("category"));
        category.created_at = Set(ts);
        category.updated_at = Set(ts);
        let model = category.try_into_model()?;

        tables.category.insert(model.id, model.clone());
        Ok(model)
    }

    async fn update(&self, mut category: category::ActiveModel) -> AppResult<category::Model> {
        let mut tables = self.db.lock()?;
        category.updated_at = Set(now());
        let model = category.try_into_model()?;

        match tables.category.get_mut(&model.id) {
            Some(existing) => {
                *existing = model.clone();
                Ok(model)
            }
            None => Err(AppError::NotFound("category not found".to_string())),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tables = self.db.lock()?;
        tables.category.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn category_model(id: i32, nama: &str) -> category::Model {
        let ts = now();
        category::Model {
            id,
            nama_category: nama.to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[tokio::test]
    async fn postgres_find_all_returns_rows_in_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![category_model(1, "Baju"), category_model(2, "Sepatu")]])
            .into_connection();
        let repo = PostgresCategoryRepository::new(Arc::new(db));

        let rows = repo.find_all().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].nama_category, "Sepatu");
    }

    #[tokio::test]
    async fn postgres_delete_issues_single_statement() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = PostgresCategoryRepository::new(Arc::new(db));

        repo.delete(3).await.unwrap();
    }
}
