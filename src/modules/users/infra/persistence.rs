use async_trait::async_trait;
use sea_orm::*;

use crate::modules::toko::entities::toko;
use crate::modules::trx::entities::trx;
use crate::modules::users::entities::{alamat, user};
use crate::modules::users::repository::{AlamatRepository, UserRepository};
use crate::shared::error::{AppError, AppResult};
use crate::shared::infra::repository::{now, InMemoryRepository, SeaOrmRepository};

const TAKEN_IDENTITY: &str = "email or phone number already exists";

/// Maps a unique index hit on `users.email` / `users.no_telp` to `Conflict`.
fn unique_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict(TAKEN_IDENTITY.to_string())
        }
        _ => AppError::DbError(err),
    }
}

// =========================================================================
// Postgres Implementation
// =========================================================================

pub type PostgresUserRepository = SeaOrmRepository<user::Entity>;
pub type PostgresAlamatRepository = SeaOrmRepository<alamat::Entity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<user::Model>> {
        user::Entity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(AppError::DbError)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<user::Model>> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db())
            .await
            .map_err(AppError::DbError)
    }

    async fn find_by_no_telp(&self, no_telp: &str) -> AppResult<Option<user::Model>> {
        user::Entity::find()
            .filter(user::Column::NoTelp.eq(no_telp))
            .one(self.db())
            .await
            .map_err(AppError::DbError)
    }

    async fn create_user_with_toko(
        &self,
        user: user::ActiveModel,
        toko: toko::ActiveModel,
    ) -> AppResult<user::Model> {
        let txn = self.db().begin().await.map_err(AppError::DbError)?;
        let res = Self::create_user_internal(&txn, user, toko).await;
        if res.is_ok() {
            txn.commit().await.map_err(AppError::DbError)?;
        } else {
            txn.rollback().await.map_err(AppError::DbError)?;
        }
        res
    }

    async fn update_user(&self, mut user: user::ActiveModel) -> AppResult<user::Model> {
        user.updated_at = Set(now());
        user.update(self.db()).await.map_err(unique_conflict)
    }
}

impl SeaOrmRepository<user::Entity> {
    async fn create_user_internal<C>(
        db: &C,
        mut user: user::ActiveModel,
        mut toko: toko::ActiveModel,
    ) -> AppResult<user::Model>
    where
        C: ConnectionTrait,
    {
        let ts = now();
        user.created_at = Set(ts);
        user.updated_at = Set(ts);
        let created_user = user.insert(db).await.map_err(unique_conflict)?;

        toko.id_user = Set(created_user.id);
        toko.created_at = Set(ts);
        toko.updated_at = Set(ts);
        toko.insert(db).await.map_err(AppError::DbError)?;

        Ok(created_user)
    }
}

#[async_trait]
impl AlamatRepository for PostgresAlamatRepository {
    async fn find_by_user_id(&self, id_user: i32) -> AppResult<Vec<alamat::Model>> {
        alamat::Entity::find()
            .filter(alamat::Column::IdUser.eq(id_user))
            .order_by_asc(alamat::Column::Id)
            .all(self.db())
            .await
            .map_err(AppError::DbError)
    }

    async fn find_by_id_and_user_id(
        &self,
        id: i32,
        id_user: i32,
    ) -> AppResult<Option<alamat::Model>> {
        alamat::Entity::find_by_id(id)
            .filter(alamat::Column::IdUser.eq(id_user))
            .one(self.db())
            .await
            .map_err(AppError::DbError)
    }

    async fn create(&self, mut alamat: alamat::ActiveModel) -> AppResult<alamat::Model> {
        let ts = now();
        alamat.created_at = Set(ts);
        alamat.updated_at = Set(ts);
        alamat.insert(self.db()).await.map_err(AppError::DbError)
    }

    async fn update(&self, mut alamat: alamat::ActiveModel) -> AppResult<alamat::Model> {
        alamat.updated_at = Set(now());
        alamat.update(self.db()).await.map_err(AppError::DbError)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        alamat::Entity::delete_by_id(id)
            .exec(self.db())
            .await
            .map_err(AppError::DbError)?;
        Ok(())
    }

    async fn is_used_by_trx(&self, id: i32) -> AppResult<bool> {
        let count = trx::Entity::find()
            .filter(trx::Column::AlamatPengiriman.eq(id))
            .count(self.db())
            .await
            .map_err(AppError::DbError)?;
        Ok(count > 0)
    }
}

// =========================================================================
// InMemory Implementation
// =========================================================================

pub type InMemoryUserRepository = InMemoryRepository<user::Entity>;
pub type InMemoryAlamatRepository = InMemoryRepository<alamat::Entity>;

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<user::Model>> {
        let tables = self.db.lock()?;
        Ok(tables.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<user::Model>> {
        let tables = self.db.lock()?;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_no_telp(&self, no_telp: &str) -> AppResult<Option<user::Model>> {
        let tables = self.db.lock()?;
        Ok(tables.users.values().find(|u| u.no_telp == no_telp).cloned())
    }

    async fn create_user_with_toko(
        &self,
        mut user: user::ActiveModel,
        mut toko: toko::ActiveModel,
    ) -> AppResult<user::Model> {
        let mut tables = self.db.lock()?;
        let ts = now();

        // Same guarantee the unique indexes give the SQL backend.
        let taken = match (&user.email, &user.no_telp) {
            (ActiveValue::Set(email), ActiveValue::Set(no_telp)) => tables
                .users
                .values()
                .any(|u| &u.email == email || &u.no_telp == no_telp),
            _ => false,
        };
        if taken {
            return Err(AppError::Conflict(TAKEN_IDENTITY.to_string()));
        }

        user.id = Set(tables.next_id("users"));
        user.created_at = Set(ts);
        user.updated_at = Set(ts);
        let model_user = user.try_into_model()?;

        toko.id = Set(tables.next_id("toko"));
        toko.id_user = Set(model_user.id);
        toko.created_at = Set(ts);
        toko.updated_at = Set(ts);
        let model_toko = toko.try_into_model()?;

        tables.users.insert(model_user.id, model_user.clone());
        tables.toko.insert(model_toko.id, model_toko);

        Ok(model_user)
    }

    async fn update_user(&self, mut user: user::ActiveModel) -> AppResult<user::Model> {
        let mut tables = self.db.lock()?;
        user.updated_at = Set(now());
        let model = user.try_into_model()?;

        if tables.users.values().any(|u| {
            u.id != model.id && (u.email == model.email || u.no_telp == model.no_telp)
        }) {
            return Err(AppError::Conflict(TAKEN_IDENTITY.to_string()));
        }

        match tables.users.get_mut(&model.id) {
            Some(existing) => {
                *existing = model.clone();
                Ok(model)
            }
            None => Err(AppError::NotFound("user not found".to_string())),
        }
    }
}

#[async_trait]
impl AlamatRepository for InMemoryAlamatRepository {
    async fn find_by_user_id(&self, id_user: i32) -> AppResult<Vec<alamat::Model>> {
        let tables = self.db.lock()?;
        Ok(tables
            .alamat
            .values()
            .filter(|a| a.id_user == id_user)
            .cloned()
            .collect())
    }

    async fn find_by_id_and_user_id(
        &self,
        id: i32,
        id_user: i32,
    ) -> AppResult<Option<alamat::Model>> {
        let tables = self.db.lock()?;
        Ok(tables
            .alamat
            .get(&id)
            .filter(|a| a.id_user == id_user)
            .cloned())
    }

    async fn create(&self, mut alamat: alamat::ActiveModel) -> AppResult<alamat::Model> {
        let mut tables = self.db.lock()?;
        let ts = now();
        alamat.id = Set(tables.next_id("alamat"));
        alamat.created_at = Set(ts);
        alamat.updated_at = Set(ts);
        let model = alamat.try_into_model()?;

        tables.alamat.insert(model.id, model.clone());
        Ok(model)
    }

    async fn update(&self, mut alamat: alamat::ActiveModel) -> AppResult<alamat::Model> {
        let mut tables = self.db.lock()?;
        alamat.updated_at = Set(now());
        let model = alamat.try_into_model()?;

        match tables.alamat.get_mut(&model.id) {
            Some(existing) => {
                *existing = model.clone();
                Ok(model)
            }
            None => Err(AppError::NotFound("alamat not found".to_string())),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tables = self.db.lock()?;
        tables.alamat.remove(&id);
        Ok(())
    }

    async fn is_used_by_trx(&self, id: i32) -> AppResult<bool> {
        let tables = self.db.lock()?;
        Ok(tables.trx.values().any(|t| t.alamat_pengiriman == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::infra::repository::InMemoryDatabase;
    use std::sync::Arc;

    fn user_model(id: i32) -> user::Model {
        let ts = now();
        user::Model {
            id,
            nama: "Budi".to_string(),
            email: "budi@example.com".to_string(),
            kata_sandi: "hash".to_string(),
            no_telp: "0811".to_string(),
            tanggal_lahir: None,
            jenis_kelamin: None,
            tentang: None,
            pekerjaan: None,
            id_provinsi: None,
            id_kota: None,
            is_admin: false,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[tokio::test]
    async fn postgres_find_by_email_returns_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(7)]])
            .into_connection();
        let repo = PostgresUserRepository::new(Arc::new(db));

        let found = repo.find_by_email("budi@example.com").await.unwrap();

        assert_eq!(found.map(|u| u.id), Some(7));
    }

    fn candidate(email: &str, no_telp: &str) -> (user::ActiveModel, toko::ActiveModel) {
        let mut active: user::ActiveModel = user_model(0).into();
        active.id = NotSet;
        active.email = Set(email.to_string());
        active.no_telp = Set(no_telp.to_string());
        let store = toko::ActiveModel {
            nama_toko: Set("Toko Budi".to_string()),
            url_foto: Set(None),
            ..Default::default()
        };
        (active, store)
    }

    #[tokio::test]
    async fn in_memory_rejects_taken_email_or_phone_under_lock() {
        let repo = InMemoryUserRepository::new(InMemoryDatabase::new());
        let (first, store) = candidate("budi@example.com", "0811");
        repo.create_user_with_toko(first, store).await.unwrap();

        let (same_email, store) = candidate("budi@example.com", "0899");
        let email_result = repo.create_user_with_toko(same_email, store).await;
        let (same_phone, store) = candidate("lain@example.com", "0811");
        let phone_result = repo.create_user_with_toko(same_phone, store).await;

        assert!(matches!(email_result, Err(AppError::Conflict(_))));
        assert!(matches!(phone_result, Err(AppError::Conflict(_))));
        let tables = repo.db.lock().unwrap();
        assert_eq!(tables.users.len(), 1);
        assert_eq!(tables.toko.len(), 1);
    }

    #[test]
    fn non_constraint_errors_stay_database_errors() {
        let err = unique_conflict(DbErr::Custom("connection reset".to_string()));
        assert!(matches!(err, AppError::DbError(_)));
    }

    #[tokio::test]
    async fn postgres_alamat_in_use_counts_orders() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(2)]])
            .into_connection();
        let repo = PostgresAlamatRepository::new(Arc::new(db));

        assert!(repo.is_used_by_trx(1).await.unwrap());
    }

    fn count_row(n: i64) -> std::collections::BTreeMap<&'static str, Value> {
        std::collections::BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn postgres_find_by_no_telp_maps_empty_result_to_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();
        let repo = PostgresUserRepository::new(Arc::new(db));

        assert!(repo.find_by_no_telp("0899").await.unwrap().is_none());
    }
}
