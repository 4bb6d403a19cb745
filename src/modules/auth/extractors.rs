use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use std::sync::Arc;

use crate::modules::auth::service::{Claims, decode_jwt};
use crate::shared::config::Config;
use crate::shared::error::AppError;

#[async_trait]
impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
    Arc<Config>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AppError::Unauthorized("Token is required".to_string()))?
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid Authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized("Invalid token format".to_string()))?;

        let config = Arc::<Config>::from_ref(state);
        decode_jwt(token, &config.jwt_secret)
    }
}
