use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;

use crate::modules::users::dtos::{LoginDto, RegisterUserDto};
use crate::modules::users::entities::user;
use crate::shared::{error::AppResult, response::ApiResponse, state::AppState};

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    pub user: user::Model,
}

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserDto>, JsonRejection>,
) -> AppResult<ApiResponse<user::Model>> {
    let Json(payload) = payload?;
    let user = state.auth_service.register(payload).await?;
    Ok(ApiResponse::success(StatusCode::CREATED, "Register Succeed", user))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let Json(payload) = payload?;
    let (token, user) = state
        .auth_service
        .login(&payload.no_telp, &payload.kata_sandi)
        .await?;

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Succeed to POST data",
        LoginResponse {
            token,
            token_type: "Bearer",
            user,
        },
    ))
}
