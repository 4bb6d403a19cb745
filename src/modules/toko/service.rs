use sea_orm::{IntoActiveModel, Set};
use std::path::PathBuf;
use std::sync::Arc;

use super::entities::toko;
use super::repository::TokoRepository;
use crate::shared::error::{AppError, AppResult};
use crate::shared::upload::{UploadedFile, save_uploaded_file};

#[derive(Clone)]
pub struct TokoService {
    tokos: Arc<dyn TokoRepository>,
    upload_dir: PathBuf,
}

impl TokoService {
    pub fn new(tokos: Arc<dyn TokoRepository>, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            tokos,
            upload_dir: upload_dir.into(),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<toko::Model>> {
        self.tokos.find_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<toko::Model> {
        self.tokos
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("toko not found".to_string()))
    }

    pub async fn get_by_user_id(&self, user_id: i32) -> AppResult<toko::Model> {
        self.tokos
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("toko not found".to_string()))
    }

    /// Renames the store; a photo, when given, replaces `url_foto`.
    pub async fn update(
        &self,
        id: i32,
        caller: i32,
        nama_toko: String,
        photo: Option<UploadedFile>,
    ) -> AppResult<toko::Model> {
        let existing = self.get_by_id(id).await?;
        if existing.id_user != caller {
            return Err(AppError::Forbidden(
                "you can only update your own toko".to_string(),
            ));
        }

        let mut active = existing.into_active_model();
        active.nama_toko = Set(nama_toko);
        if let Some(photo) = photo {
            let file_name = save_uploaded_file(&self.upload_dir, &photo).await?;
            active.url_foto = Set(Some(file_name));
        }

        self.tokos.update(active).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::users::entities::user;
    use crate::shared::infra::repository::InMemoryDatabase;
    use crate::shared::repository::Repositories;

    async fn seed_owner(repos: &Repositories, no_telp: &str) -> (user::Model, toko::Model) {
        let new_user = user::ActiveModel {
            nama: Set("Budi".to_string()),
            email: Set(format!("{}@example.com", no_telp)),
            kata_sandi: Set("hash".to_string()),
            no_telp: Set(no_telp.to_string()),
            tanggal_lahir: Set(None),
            jenis_kelamin: Set(None),
            tentang: Set(None),
            pekerjaan: Set(None),
            id_provinsi: Set(None),
            id_kota: Set(None),
            is_admin: Set(false),
            ..Default::default()
        };
        let new_toko = toko::ActiveModel {
            nama_toko: Set("Toko Budi".to_string()),
            url_foto: Set(None),
            ..Default::default()
        };
        let user = repos
            .users
            .create_user_with_toko(new_user, new_toko)
            .await
            .unwrap();
        let toko = repos.tokos.find_by_user_id(user.id).await.unwrap().unwrap();
        (user, toko)
    }

    #[tokio::test]
    async fn owner_can_rename_and_set_photo() {
        let dir = tempfile::tempdir().unwrap();
        let repos = Repositories::in_memory(InMemoryDatabase::new());
        let service = TokoService::new(repos.tokos.clone(), dir.path());
        let (owner, toko) = seed_owner(&repos, "0811").await;

        let photo = UploadedFile {
            file_name: "logo.png".to_string(),
            content: vec![1, 2, 3],
        };
        let updated = service
            .update(toko.id, owner.id, "Toko Baru".to_string(), Some(photo))
            .await
            .unwrap();

        assert_eq!(updated.nama_toko, "Toko Baru");
        let url = updated.url_foto.unwrap();
        assert!(url.ends_with("-logo.png"));
        assert!(dir.path().join(url).exists());
    }

    #[tokio::test]
    async fn update_without_photo_keeps_existing_one() {
        let dir = tempfile::tempdir().unwrap();
        let repos = Repositories::in_memory(InMemoryDatabase::new());
        let service = TokoService::new(repos.tokos.clone(), dir.path());
        let (owner, toko) = seed_owner(&repos, "0811").await;

        let updated = service
            .update(toko.id, owner.id, "Toko Baru".to_string(), None)
            .await
            .unwrap();

        assert_eq!(updated.url_foto, None);
        assert_eq!(service.get_by_user_id(owner.id).await.unwrap().nama_toko, "Toko Baru");
    }

    #[tokio::test]
    async fn other_user_is_forbidden() {
        let repos = Repositories::in_memory(InMemoryDatabase::new());
        let service = TokoService::new(repos.tokos.clone(), "./uploads");
        let (_, toko) = seed_owner(&repos, "0811").await;
        let (intruder, _) = seed_owner(&repos, "0822").await;

        let result = service
            .update(toko.id, intruder.id, "Milik Saya".to_string(), None)
            .await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn missing_store_is_not_found() {
        let repos = Repositories::in_memory(InMemoryDatabase::new());
        let service = TokoService::new(repos.tokos.clone(), "./uploads");

        assert!(matches!(
            service.get_by_user_id(5).await,
            Err(AppError::NotFound(_))
        ));
    }
}
