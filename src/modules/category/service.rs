use sea_orm::{IntoActiveModel, Set};
use std::sync::Arc;

use super::entities::category;
use super::repository::CategoryRepository;
use crate::modules::users::repository::UserRepository;
use crate::shared::error::{AppError, AppResult};

#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    users: Arc<dyn UserRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { categories, users }
    }

    pub async fn list(&self) -> AppResult<Vec<category::Model>> {
        self.categories.find_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<category::Model> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("category not found".to_string()))
    }

    pub async fn create(&self, caller: i32, nama_category: String) -> AppResult<category::Model> {
        self.ensure_admin(caller).await?;
        let new_category = category::ActiveModel {
            nama_category: Set(nama_category),
            ..Default::default()
        };
        self.categories.create(new_category).await
    }

    pub async fn update(
        &self,
        caller: i32,
        id: i32,
        nama_category: String,
    ) -> AppResult<category::Model> {
        self.ensure_admin(caller).await?;
        let mut active = self.get_by_id(id).await?.into_active_model();
        active.nama_category = Set(nama_category);
        self.categories.update(active).await
    }

    pub async fn delete(&self, caller: i32, id: i32) -> AppResult<()> {
        self.ensure_admin(caller).await?;
        let existing = self.get_by_id(id).await?;
        self.categories.delete(existing.id).await
    }

    async fn ensure_admin(&self, caller: i32) -> AppResult<()> {
        match self.users.find_by_id(caller).await? {
            Some(user) if user.is_admin => Ok(()),
            _ => Err(AppError::Forbidden(
                "only admin can manage categories".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::toko::entities::toko;
    use crate::modules::users::entities::user;
    use crate::shared::infra::repository::InMemoryDatabase;
    use crate::shared::repository::Repositories;

    async fn seed_user(repos: &Repositories, no_telp: &str, is_admin: bool) -> user::Model {
        let new_user = user::ActiveModel {
            nama: Set("Admin".to_string()),
            email: Set(format!("{}@example.com", no_telp)),
            kata_sandi: Set("hash".to_string()),
            no_telp: Set(no_telp.to_string()),
            tanggal_lahir: Set(None),
            jenis_kelamin: Set(None),
            tentang: Set(None),
            pekerjaan: Set(None),
            id_provinsi: Set(None),
            id_kota: Set(None),
            is_admin: Set(is_admin),
            ..Default::default()
        };
        let new_toko = toko::ActiveModel {
            nama_toko: Set("Toko Admin".to_string()),
            url_foto: Set(None),
            ..Default::default()
        };
        repos
            .users
            .create_user_with_toko(new_user, new_toko)
            .await
            .unwrap()
    }

    fn setup() -> (CategoryService, Repositories) {
        let repos = Repositories::in_memory(InMemoryDatabase::new());
        (
            CategoryService::new(repos.categories.clone(), repos.users.clone()),
            repos,
        )
    }

    #[tokio::test]
    async fn update_persists_new_name_and_keeps_id() {
        let (service, repos) = setup();
        let admin = seed_user(&repos, "0811", true).await;
        let created = service.create(admin.id, "Baju".to_string()).await.unwrap();

        let updated = service
            .update(admin.id, created.id, "Pakaian".to_string())
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        let stored = service.get_by_id(created.id).await.unwrap();
        assert_eq!(stored.nama_category, "Pakaian");
    }

    #[tokio::test]
    async fn non_admin_cannot_mutate() {
        let (service, repos) = setup();
        let member = seed_user(&repos, "0822", false).await;

        let result = service.create(member.id, "Baju".to_string()).await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_category_is_not_found() {
        let (service, repos) = setup();
        let admin = seed_user(&repos, "0811", true).await;

        let result = service.delete(admin.id, 99).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
