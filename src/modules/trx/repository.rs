use async_trait::async_trait;

use super::dtos::{NewOrder, TrxWithDetails};
use crate::shared::error::AppResult;

#[async_trait]
pub trait TrxRepository: Send + Sync {
    async fn find_by_user_id(&self, id_user: i32) -> AppResult<Vec<TrxWithDetails>>;
    async fn find_by_id_and_user_id(
        &self,
        id: i32,
        id_user: i32,
    ) -> AppResult<Option<TrxWithDetails>>;

    /// Decrements stock for every line, then inserts the order and its lines, all or nothing.
    /// A line whose stock ran out since validation fails the whole call with `Conflict`.
    async fn create(&self, order: NewOrder) -> AppResult<TrxWithDetails>;
}
