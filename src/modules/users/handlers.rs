use axum::{
    Json,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
};

use super::dtos::{AlamatDto, UpdateProfileDto};
use super::entities::{alamat, user};
use crate::modules::auth::service::Claims;
use crate::shared::{error::AppResult, response::ApiResponse, state::AppState};

pub async fn get_me(
    State(state): State<AppState>,
    claims: Claims,
) -> AppResult<ApiResponse<user::Model>> {
    let user = state.user_service.get_profile(claims.id).await?;
    Ok(ApiResponse::ok(user))
}

pub async fn update_me(
    State(state): State<AppState>,
    claims: Claims,
    payload: Result<Json<UpdateProfileDto>, JsonRejection>,
) -> AppResult<ApiResponse<user::Model>> {
    let Json(payload) = payload?;
    let user = state.user_service.update_profile(claims.id, payload).await?;
    Ok(ApiResponse::updated(user))
}

pub async fn list_alamat(
    State(state): State<AppState>,
    claims: Claims,
) -> AppResult<ApiResponse<Vec<alamat::Model>>> {
    let list = state.user_service.list_alamat(claims.id).await?;
    Ok(ApiResponse::ok(list))
}

pub async fn get_alamat(
    State(state): State<AppState>,
    claims: Claims,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<ApiResponse<alamat::Model>> {
    let Path(id) = id?;
    let alamat = state.user_service.get_alamat(claims.id, id).await?;
    Ok(ApiResponse::ok(alamat))
}

pub async fn create_alamat(
    State(state): State<AppState>,
    claims: Claims,
    payload: Result<Json<AlamatDto>, JsonRejection>,
) -> AppResult<ApiResponse<alamat::Model>> {
    let Json(payload) = payload?;
    let alamat = state.user_service.create_alamat(claims.id, payload).await?;
    Ok(ApiResponse::created(alamat))
}

pub async fn update_alamat(
    State(state): State<AppState>,
    claims: Claims,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<AlamatDto>, JsonRejection>,
) -> AppResult<ApiResponse<alamat::Model>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let alamat = state
        .user_service
        .update_alamat(claims.id, id, payload)
        .await?;
    Ok(ApiResponse::updated(alamat))
}

pub async fn delete_alamat(
    State(state): State<AppState>,
    claims: Claims,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<ApiResponse<()>> {
    let Path(id) = id?;
    state.user_service.delete_alamat(claims.id, id).await?;
    Ok(ApiResponse::deleted())
}
