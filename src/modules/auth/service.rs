use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::modules::toko::entities::toko;
use crate::modules::users::dtos::RegisterUserDto;
use crate::modules::users::entities::user;
use crate::modules::users::repository::UserRepository;
use crate::modules::users::utils::{hash_password, verify_password};
use crate::shared::config::Config;
use crate::shared::error::{AppError, AppResult};

pub const TOKEN_TTL_HOURS: i64 = 72;

const BAD_CREDENTIALS: &str = "no telp or password is wrong";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32, // User id
    pub email: String,
    pub exp: usize,
}

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    config: Arc<Config>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, config: Arc<Config>) -> Self {
        Self { users, config }
    }

    /// Creates the account together with its store.
    pub async fn register(&self, candidate: RegisterUserDto) -> AppResult<user::Model> {
        if self.users.find_by_email(&candidate.email).await?.is_some() {
            return Err(AppError::Conflict("email already exists".to_string()));
        }
        if self.users.find_by_no_telp(&candidate.no_telp).await?.is_some() {
            return Err(AppError::Conflict("phone number already exists".to_string()));
        }

        let hashed = hash_password(candidate.kata_sandi).await?;
        let is_admin = self.config.admin_no_telp.as_deref() == Some(candidate.no_telp.as_str());

        let new_toko = toko::ActiveModel {
            nama_toko: Set(format!("Toko {}", candidate.nama)),
            url_foto: Set(None),
            ..Default::default()
        };

        let new_user = user::ActiveModel {
            nama: Set(candidate.nama),
            email: Set(candidate.email),
            kata_sandi: Set(hashed),
            no_telp: Set(candidate.no_telp),
            tanggal_lahir: Set(candidate.tanggal_lahir),
            jenis_kelamin: Set(candidate.jenis_kelamin),
            tentang: Set(candidate.tentang),
            pekerjaan: Set(candidate.pekerjaan),
            id_provinsi: Set(candidate.id_provinsi),
            id_kota: Set(candidate.id_kota),
            is_admin: Set(is_admin),
            ..Default::default()
        };

        let user = self.users.create_user_with_toko(new_user, new_toko).await?;
        if user.is_admin {
            tracing::info!("Registered admin user {}", user.id);
        } else {
            tracing::info!("Registered user {}", user.id);
        }
        Ok(user)
    }

    /// Unknown phone and wrong password fail identically.
    pub async fn login(&self, no_telp: &str, password: &str) -> AppResult<(String, user::Model)> {
        let user = self
            .users
            .find_by_no_telp(no_telp)
            .await?
            .ok_or_else(|| AppError::Unauthorized(BAD_CREDENTIALS.to_string()))?;

        if !verify_password(password.to_string(), user.kata_sandi.clone()).await {
            tracing::warn!("Failed login attempt for user {}", user.id);
            return Err(AppError::Unauthorized(BAD_CREDENTIALS.to_string()));
        }

        let token = self.generate_jwt(&user)?;
        Ok((token, user))
    }

    fn generate_jwt(&self, user: &user::Model) -> AppResult<String> {
        let expiration = Utc::now()
            .checked_add_signed(Duration::hours(TOKEN_TTL_HOURS))
            .ok_or_else(|| AppError::InternalServerError("invalid token expiry".to_string()))?
            .timestamp() as usize;

        let claims = Claims {
            id: user.id,
            email: user.email.clone(),
            exp: expiration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::InternalServerError(format!("failed to create token: {}", e)))
    }
}

/// Verifies signature and expiry.
pub fn decode_jwt(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!("JWT parsing error: {}", e);
        AppError::Unauthorized("Invalid or expired token".to_string())
    })
}
