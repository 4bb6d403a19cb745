use axum::extract::{
    Multipart, Path, Query, State,
    multipart::MultipartRejection,
    rejection::{PathRejection, QueryRejection},
};

use super::dtos::{ProductDetail, ProductFilter, ProductPayload};
use super::entities::product;
use crate::modules::auth::service::Claims;
use crate::shared::{
    error::AppResult, response::ApiResponse, state::AppState, upload::FormData,
};

pub async fn list_products(
    State(state): State<AppState>,
    filter: Result<Query<ProductFilter>, QueryRejection>,
) -> AppResult<ApiResponse<Vec<product::Model>>> {
    let Query(filter) = filter?;
    let products = state.product_service.list(filter).await?;
    Ok(ApiResponse::ok(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<ApiResponse<ProductDetail>> {
    let Path(id) = id?;
    let product = state.product_service.get_by_id(id).await?;
    Ok(ApiResponse::ok(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    claims: Claims,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<ApiResponse<ProductDetail>> {
    let mut form = FormData::from_multipart(multipart?).await?;
    let payload = ProductPayload::from_form(&form)?;
    let photos = form.take_files("photos");

    let product = state
        .product_service
        .create(claims.id, payload, photos)
        .await?;
    Ok(ApiResponse::created(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    claims: Claims,
    id: Result<Path<i32>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<ApiResponse<ProductDetail>> {
    let Path(id) = id?;
    let mut form = FormData::from_multipart(multipart?).await?;
    let payload = ProductPayload::from_form(&form)?;
    let photos = form.take_files("photos");

    let product = state
        .product_service
        .update(claims.id, id, payload, photos)
        .await?;
    Ok(ApiResponse::updated(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    claims: Claims,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<ApiResponse<()>> {
    let Path(id) = id?;
    state.product_service.delete(claims.id, id).await?;
    Ok(ApiResponse::deleted())
}
