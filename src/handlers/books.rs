//! 图书目录的 HTTP 处理器

use super::extract::AppJson;
use crate::{error::AppError, middleware::AppState, models::book::*};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// 列出图书
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookQuery>,
) -> Result<impl IntoResponse, AppError> {
    let books = state.catalog_service.list_books(&query).await?;
    Ok(Json(books))
}

/// 获取图书详情
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let book = state.catalog_service.get_book(id).await?;
    Ok(Json(book))
}

/// 新增图书
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<BookRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.catalog_service.add_book(req).await?;
    Ok(Json("Book added"))
}

/// 更新图书
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    AppJson(req): AppJson<BookRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.catalog_service.update_book(id, req).await?;
    Ok(Json("Book updated"))
}

/// 删除图书
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.catalog_service.delete_book(id).await?;
    Ok(Json("Book deleted"))
}
