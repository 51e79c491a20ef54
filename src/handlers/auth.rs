//! 认证相关的 HTTP 处理器

use super::extract::AppJson;
use crate::{error::AppError, middleware::AppState, models::auth::*};
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

/// 注册
pub async fn signup(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.auth_service.signup(req).await?;
    Ok(Json(response))
}

/// 登录
pub async fn login(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.auth_service.login(req).await?;
    Ok(Json(response))
}
