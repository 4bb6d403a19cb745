use async_trait::async_trait;

use super::entities::category;
use crate::shared::error::AppResult;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<category::Model>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<category::Model>>;
    async fn create(&self, category: category::ActiveModel) -> AppResult<category::Model>;
    async fn update(&self, category: category::ActiveModel) -> AppResult<category::Model>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}
