use sea_orm::{IntoActiveModel, Set};
use std::sync::Arc;

use super::dtos::{AlamatDto, UpdateProfileDto};
use super::entities::{alamat, user};
use super::repository::{AlamatRepository, UserRepository};
use super::utils::hash_password;
use crate::shared::error::{AppError, AppResult};

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    alamat: Arc<dyn AlamatRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, alamat: Arc<dyn AlamatRepository>) -> Self {
        Self { users, alamat }
    }

    pub async fn get_profile(&self, user_id: i32) -> AppResult<user::Model> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))
    }

    pub async fn update_profile(
        &self,
        user_id: i32,
        patch: UpdateProfileDto,
    ) -> AppResult<user::Model> {
        let existing = self.get_profile(user_id).await?;

        if patch.email != existing.email {
            if let Some(other) = self.users.find_by_email(&patch.email).await? {
                if other.id != user_id {
                    return Err(AppError::Conflict("email already exists".to_string()));
                }
            }
        }
        if patch.no_telp != existing.no_telp {
            if let Some(other) = self.users.find_by_no_telp(&patch.no_telp).await? {
                if other.id != user_id {
                    return Err(AppError::Conflict("phone number already exists".to_string()));
                }
            }
        }

        let mut active = existing.into_active_model();
        active.nama = Set(patch.nama);
        active.email = Set(patch.email);
        active.no_telp = Set(patch.no_telp);
        active.tanggal_lahir = Set(patch.tanggal_lahir);
        active.jenis_kelamin = Set(patch.jenis_kelamin);
        active.tentang = Set(patch.tentang);
        active.pekerjaan = Set(patch.pekerjaan);
        active.id_provinsi = Set(patch.id_provinsi);
        active.id_kota = Set(patch.id_kota);
        if let Some(password) = patch.kata_sandi.filter(|p| !p.is_empty()) {
            active.kata_sandi = Set(hash_password(password).await?);
        }

        self.users.update_user(active).await
    }

    pub async fn list_alamat(&self, user_id: i32) -> AppResult<Vec<alamat::Model>> {
        self.alamat.find_by_user_id(user_id).await
    }

    pub async fn get_alamat(&self, user_id: i32, id: i32) -> AppResult<alamat::Model> {
        self.alamat
            .find_by_id_and_user_id(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("alamat not found".to_string()))
    }

    pub async fn create_alamat(&self, user_id: i32, payload: AlamatDto) -> AppResult<alamat::Model> {
        let new_alamat = alamat::ActiveModel {
            id_user: Set(user_id),
            judul_alamat: Set(payload.judul_alamat),
            nama_penerima: Set(payload.nama_penerima),
            no_telp: Set(payload.no_telp),
            detail_alamat: Set(payload.detail_alamat),
            ..Default::default()
        };
        self.alamat.create(new_alamat).await
    }

    pub async fn update_alamat(
        &self,
        user_id: i32,
        id: i32,
        payload: AlamatDto,
    ) -> AppResult<alamat::Model> {
        let mut active = self.get_alamat(user_id, id).await?.into_active_model();
        active.judul_alamat = Set(payload.judul_alamat);
        active.nama_penerima = Set(payload.nama_penerima);
        active.no_telp = Set(payload.no_telp);
        active.detail_alamat = Set(payload.detail_alamat);
        self.alamat.update(active).await
    }

    pub async fn delete_alamat(&self, user_id: i32, id: i32) -> AppResult<()> {
        let existing = self.get_alamat(user_id, id).await?;
        if self.alamat.is_used_by_trx(existing.id).await? {
            return Err(AppError::Conflict(
                "alamat is used by an existing transaction".to_string(),
            ));
        }
        self.alamat.delete(existing.id).await
    }
}
