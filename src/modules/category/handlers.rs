use axum::{
    Json,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
};

use super::dtos::CategoryDto;
use super::entities::category;
use crate::modules::auth::service::Claims;
use crate::shared::{error::AppResult, response::ApiResponse, state::AppState};

pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<category::Model>>> {
    let categories = state.category_service.list().await?;
    Ok(ApiResponse::ok(categories))
}

pub async fn get_category(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<ApiResponse<category::Model>> {
    let Path(id) = id?;
    let category = state.category_service.get_by_id(id).await?;
    Ok(ApiResponse::ok(category))
}

pub async fn create_category(
    State(state): State<AppState>,
    claims: Claims,
    payload: Result<Json<CategoryDto>, JsonRejection>,
) -> AppResult<ApiResponse<category::Model>> {
    let Json(payload) = payload?;
    let category = state
        .category_service
        .create(claims.id, payload.nama_category)
        .await?;
    Ok(ApiResponse::created(category))
}

pub async fn update_category(
    State(state): State<AppState>,
    claims: Claims,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CategoryDto>, JsonRejection>,
) -> AppResult<ApiResponse<category::Model>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let category = state
        .category_service
        .update(claims.id, id, payload.nama_category)
        .await?;
    Ok(ApiResponse::updated(category))
}

pub async fn delete_category(
    State(state): State<AppState>,
    claims: Claims,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<ApiResponse<()>> {
    let Path(id) = id?;
    state.category_service.delete(claims.id, id).await?;
    Ok(ApiResponse::deleted())
}
