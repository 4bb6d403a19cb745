use async_trait::async_trait;

use super::dtos::ProductFilter;
use super::entities::{product, product_photo};
use crate::shared::error::AppResult;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self, filter: &ProductFilter) -> AppResult<Vec<product::Model>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<product::Model>>;
    async fn create(&self, product: product::ActiveModel) -> AppResult<product::Model>;
    async fn update(&self, product: product::ActiveModel) -> AppResult<product::Model>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[async_trait]
pub trait ProductPhotoRepository: Send + Sync {
    async fn find_by_product_id(&self, id_produk: i32) -> AppResult<Vec<product_photo::Model>>;
    async fn create(&self, id_produk: i32, url: String) -> AppResult<product_photo::Model>;
    async fn delete_by_product_id(&self, id_produk: i32) -> AppResult<()>;
}
