//! Authentication-related models

use super::user::Role;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signup request. Fields are optional so that a missing field reports
/// "All fields are required" instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SignupRequest {
    pub name: Option<String>,
    #[validate(contains(pattern = "@", message = "Invalid email address"))]
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Signup fields after the presence and format checks
#[derive(Debug)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl SignupRequest {
    /// Check presence first, then format. Password policy is applied by the caller.
    pub fn checked(&self) -> Result<NewUser<'_>, AppError> {
        let (Some(name), Some(email), Some(password)) = (
            non_empty(&self.name),
            non_empty(&self.email),
            non_empty(&self.password),
        ) else {
            return Err(AppError::validation("All fields are required"));
        };

        self.validate().map_err(|errors| {
            let message = errors
                .field_errors()
                .get("email")
                .and_then(|errs| errs.first())
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| errors.to_string());
            AppError::Validation(message)
        })?;

        Ok(NewUser {
            name,
            email,
            password,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
}

/// Login request. Missing fields behave like an unknown email.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
}
