//! 订单的 HTTP 处理器

use super::extract::AppJson;
use crate::{
    auth::AuthContext, error::AppError, middleware::AppState, models::order::CreateOrderRequest,
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// 下单（结账）
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    AppJson(req): AppJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state
        .order_service
        .create_order(auth_context.user_id, req)
        .await?;
    Ok(Json(response))
}

/// 用户订单明细
pub async fn get_user_orders(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .order_service
        .get_user_orders(&auth_context, user_id)
        .await?;
    Ok(Json(rows))
}

/// 订单详情
pub async fn get_order_by_id(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .order_service
        .get_order_by_id(&auth_context, id)
        .await?;
    Ok(Json(rows))
}

/// 全部订单（管理员）
pub async fn get_all_orders(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let orders = state.order_service.get_all_orders(&auth_context).await?;
    Ok(Json(orders))
}
