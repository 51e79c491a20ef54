//! JWT 认证中间件

use crate::{auth::jwt::JwtService, error::AppError, models::user::Role};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// 认证上下文（附加到请求扩展）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: i64,
    pub role: Role,
}

impl AuthContext {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// 要求管理员角色
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            tracing::warn!(user_id = self.user_id, "Admin role required");
            Err(AppError::Forbidden)
        }
    }

    /// 只允许资源所有者或管理员访问
    pub fn require_owner_or_admin(&self, owner_id: i64) -> Result<(), AppError> {
        if self.is_admin() || self.user_id == owner_id {
            Ok(())
        } else {
            tracing::warn!(
                user_id = self.user_id,
                owner_id,
                "Access to another user's resource denied"
            );
            Err(AppError::Forbidden)
        }
    }
}

// 实现 FromRequestParts 以便在 handler 中直接提取 AuthContext
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// 从 Authorization 头提取令牌
pub fn extract_token(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(AppError::Unauthorized)
}

/// JWT 认证中间件 - 必须认证
///
/// 缺少令牌返回 401，令牌无效返回 403。
pub async fn jwt_auth_middleware(
    State(jwt_service): State<Arc<JwtService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(req.headers())?;

    let claims = jwt_service.validate(&token)?;

    req.extensions_mut().insert(AuthContext {
        user_id: claims.id,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

/// 管理员中间件，必须放在 jwt_auth_middleware 之后
pub async fn admin_only_middleware(req: Request, next: Next) -> Result<Response, AppError> {
    let auth_context = req
        .extensions()
        .get::<AuthContext>()
        .ok_or(AppError::Unauthorized)?;

    auth_context.require_admin()?;

    Ok(next.run(req).await)
}
