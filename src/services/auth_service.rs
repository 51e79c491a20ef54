//! 认证服务：注册、登录

use crate::{
    auth::{jwt::JwtService, password::PasswordHasher},
    config::AppConfig,
    error::AppError,
    models::auth::*,
    repository::user_repo::UserRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

const USER_NOT_FOUND: &str = "User not found";
const INVALID_PASSWORD: &str = "Invalid password";
const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService {
    db: PgPool,
    jwt_service: Arc<JwtService>,
    config: Arc<AppConfig>,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(db: PgPool, jwt_service: Arc<JwtService>, config: Arc<AppConfig>) -> Self {
        Self {
            db,
            jwt_service,
            config,
            hasher: PasswordHasher::new(),
        }
    }

    /// 用户注册，成功时不签发令牌
    pub async fn signup(&self, req: SignupRequest) -> Result<SignupResponse, AppError> {
        let new_user = req.checked()?;
        PasswordHasher::validate_password_policy(new_user.password, &self.config.security)?;

        let password_hash = self.hasher.hash(new_user.password)?;

        let user_repo = UserRepository::new(self.db.clone());
        let user = user_repo
            .create(new_user.name, new_user.email, &password_hash)
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    tracing::debug!(email = %new_user.email, "Signup with existing email");
                    AppError::Conflict("Email already exists".to_string())
                } else {
                    e
                }
            })?;

        metrics::counter!("signups_total").increment(1);
        tracing::info!(user_id = user.id, "User registered");

        Ok(SignupResponse {
            message: "User registered successfully".to_string(),
        })
    }

    /// 用户登录
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, AppError> {
        let user_repo = UserRepository::new(self.db.clone());

        let Some(user) = user_repo.find_by_email(&req.email).await? else {
            metrics::counter!("logins_total", "outcome" => "unknown_user").increment(1);
            return Err(self.login_error(USER_NOT_FOUND));
        };

        if !self.hasher.verify(&req.password, &user.password)? {
            metrics::counter!("logins_total", "outcome" => "bad_password").increment(1);
            tracing::debug!(user_id = user.id, "Login with wrong password");
            return Err(self.login_error(INVALID_PASSWORD));
        }

        let token = self.jwt_service.issue(user.id, user.role)?;

        metrics::counter!("logins_total", "outcome" => "success").increment(1);
        tracing::info!(user_id = user.id, role = user.role.as_str(), "User logged in");

        Ok(LoginResponse {
            token,
            role: user.role,
        })
    }

    fn login_error(&self, message: &str) -> AppError {
        if self.config.security.uniform_login_errors {
            AppError::authentication(INVALID_CREDENTIALS)
        } else {
            AppError::authentication(message)
        }
    }
}
