use axum::extract::{
    Multipart, Path, State,
    multipart::MultipartRejection,
    rejection::PathRejection,
};

use super::entities::toko;
use crate::modules::auth::service::Claims;
use crate::shared::{
    error::AppResult, response::ApiResponse, state::AppState, upload::FormData,
};

pub async fn list_tokos(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<toko::Model>>> {
    let tokos = state.toko_service.list().await?;
    Ok(ApiResponse::ok(tokos))
}

pub async fn get_my_toko(
    State(state): State<AppState>,
    claims: Claims,
) -> AppResult<ApiResponse<toko::Model>> {
    let toko = state.toko_service.get_by_user_id(claims.id).await?;
    Ok(ApiResponse::ok(toko))
}

pub async fn get_toko(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<ApiResponse<toko::Model>> {
    let Path(id) = id?;
    let toko = state.toko_service.get_by_id(id).await?;
    Ok(ApiResponse::ok(toko))
}

pub async fn update_toko(
    State(state): State<AppState>,
    claims: Claims,
    id: Result<Path<i32>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<ApiResponse<toko::Model>> {
    let Path(id) = id?;
    let mut form = FormData::from_multipart(multipart?).await?;

    let nama_toko = form.require_text("nama_toko")?;
    let photo = form.take_files("photo").into_iter().next();

    let toko = state
        .toko_service
        .update(id, claims.id, nama_toko, photo)
        .await?;
    Ok(ApiResponse::updated(toko))
}
