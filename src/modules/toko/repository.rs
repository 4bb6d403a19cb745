use async_trait::async_trait;

use super::entities::toko;
use crate::shared::error::AppResult;

#[async_trait]
pub trait TokoRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<toko::Model>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<toko::Model>>;
    async fn find_by_user_id(&self, id_user: i32) -> AppResult<Option<toko::Model>>;
    async fn update(&self, toko: toko::ActiveModel) -> AppResult<toko::Model>;
}
