//! 错误处理单元测试
//!
//! 测试应用错误类型的状态码、用户消息和响应格式

use axum::{http::StatusCode, response::IntoResponse};
use bookstore_service::error::AppError;
use http_body_util::BodyExt;

// ==================== 错误状态码测试 ====================

#[test]
fn test_error_status_codes() {
    assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        AppError::Authentication("Invalid password".to_string()).status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(AppError::Forbidden.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(AppError::NotFound("book".to_string()).status_code(), StatusCode::NOT_FOUND);
    assert_eq!(AppError::Validation("error".to_string()).status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        AppError::Conflict("Email already exists".to_string()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::Database(sqlx::Error::RowNotFound).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// ==================== 用户消息测试 ====================

#[test]
fn test_user_messages() {
    assert_eq!(AppError::Unauthorized.user_message(), "Access denied. No token provided");
    assert_eq!(AppError::Forbidden.user_message(), "Access denied");
    assert_eq!(AppError::authentication("User not found").user_message(), "User not found");
    assert_eq!(AppError::internal_error("pool closed").user_message(), "Server error");
    assert_eq!(AppError::Config("bad".to_string()).user_message(), "Configuration error");
}

// ==================== 响应格式测试 ====================

#[tokio::test]
async fn test_error_response_body() {
    let response = AppError::validation("Cart is empty").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["message"], "Cart is empty");
    assert_eq!(json["code"], 400);
    assert!(json["request_id"].is_string());
}

#[tokio::test]
async fn test_database_error_response_hides_details() {
    let response = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(body.contains("Database error occurred"));
    assert!(!body.to_lowercase().contains("pool"));
}
