use axum::{
    Json,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
};

use super::dtos::{CreateTrxDto, TrxWithDetails};
use crate::modules::auth::service::Claims;
use crate::shared::{error::AppResult, response::ApiResponse, state::AppState};

pub async fn list_trx(
    State(state): State<AppState>,
    claims: Claims,
) -> AppResult<ApiResponse<Vec<TrxWithDetails>>> {
    let orders = state.trx_service.list_orders(claims.id).await?;
    Ok(ApiResponse::ok(orders))
}

pub async fn get_trx(
    State(state): State<AppState>,
    claims: Claims,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<ApiResponse<TrxWithDetails>> {
    let Path(id) = id?;
    let order = state.trx_service.get_order(claims.id, id).await?;
    Ok(ApiResponse::ok(order))
}

pub async fn create_trx(
    State(state): State<AppState>,
    claims: Claims,
    payload: Result<Json<CreateTrxDto>, JsonRejection>,
) -> AppResult<ApiResponse<TrxWithDetails>> {
    let Json(payload) = payload?;
    let order = state.trx_service.create_order(claims.id, payload).await?;
    Ok(ApiResponse::created(order))
}
