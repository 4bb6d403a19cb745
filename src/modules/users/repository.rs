use async_trait::async_trait;

use super::entities::{alamat, user};
use crate::modules::toko::entities::toko;
use crate::shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<user::Model>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<user::Model>>;
    async fn find_by_no_telp(&self, no_telp: &str) -> AppResult<Option<user::Model>>;

    /// Inserts the user and its store in one transaction; `toko.id_user` is filled in here.
    /// A taken email or phone number fails with `Conflict`.
    async fn create_user_with_toko(
        &self,
        user: user::ActiveModel,
        toko: toko::ActiveModel,
    ) -> AppResult<user::Model>;

    async fn update_user(&self, user: user::ActiveModel) -> AppResult<user::Model>;
}

#[async_trait]
pub trait AlamatRepository: Send + Sync {
    async fn find_by_user_id(&self, id_user: i32) -> AppResult<Vec<alamat::Model>>;
    async fn find_by_id_and_user_id(
        &self,
        id: i32,
        id_user: i32,
    ) -> AppResult<Option<alamat::Model>>;
    async fn create(&self, alamat: alamat::ActiveModel) -> AppResult<alamat::Model>;
    async fn update(&self, alamat: alamat::ActiveModel) -> AppResult<alamat::Model>;
    async fn delete(&self, id: i32) -> AppResult<()>;
    /// Whether any order ships to this address.
    async fn is_used_by_trx(&self, id: i32) -> AppResult<bool>;
}
