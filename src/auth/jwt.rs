//! JWT token generation and validation
//!
//! Tokens carry the user id and role. They never expire unless
//! `security.token_ttl_secs` is configured.

use crate::{config::AppConfig, error::AppError, models::user::Role};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    pub id: i64,

    /// User role
    pub role: Role,

    /// Issued at
    pub iat: i64,

    /// Expiration, absent for non-expiring tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// JWT service
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_secs: Option<u64>,
}

impl JwtService {
    /// Create JWT service from config
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let secret = config.security.jwt_secret.expose_secret();

        // Ensure secret is at least 32 bytes for HS256
        if secret.len() < 32 {
            return Err(AppError::Config("JWT secret too short (min 32 chars)".to_string()));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl_secs: config.security.token_ttl_secs,
        })
    }

    /// Issue a signed token for a user
    pub fn issue(&self, user_id: i64, role: Role) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = self
            .token_ttl_secs
            .map(|ttl| (now + Duration::seconds(ttl as i64)).timestamp());

        let claims = Claims {
            id: user_id,
            role,
            iat: now.timestamp(),
            exp,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode token: {:?}", e);
            AppError::Internal(format!("Failed to encode token: {}", e))
        })
    }

    /// Validate and decode token
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // exp is optional; checked below when present
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!("Token validation failed: {:?}", e);
                AppError::Forbidden
            })?
            .claims;

        if let Some(exp) = claims.exp {
            if exp < Utc::now().timestamp() {
                tracing::debug!(user_id = claims.id, "Token expired");
                return Err(AppError::Forbidden);
            }
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig};
    use secrecy::Secret;

    fn test_config(token_ttl_secs: Option<u64>) -> AppConfig {
        AppConfig {
            server: ServerConfig {
                addr: "127.0.0.1:5000".to_string(),
                graceful_shutdown_timeout_secs: 30,
                cors_allow_any: true,
                body_limit_bytes: 1024 * 1024,
            },
            database: DatabaseConfig {
                url: Secret::new("postgresql://localhost/test".to_string()),
                max_connections: 10,
                min_connections: 1,
                acquire_timeout_secs: 30,
                idle_timeout_secs: 600,
                max_lifetime_secs: 1800,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "json".to_string(),
            },
            security: SecurityConfig {
                jwt_secret: Secret::new("test_secret_key_32_characters_long!".to_string()),
                token_ttl_secs,
                password_min_length: 6,
                password_require_uppercase: false,
                password_require_digit: false,
                protect_catalog_writes: true,
                uniform_login_errors: false,
            },
        }
    }

    #[test]
    fn test_issue_and_validate() {
        let service = JwtService::from_config(&test_config(None)).unwrap();

        let token = service.issue(42, Role::Admin).unwrap();
        let claims = service.validate(&token).unwrap();

        assert_eq!(claims.id, 42);
        assert_eq!(claims.role, Role::Admin);
        assert!(claims.exp.is_none());
    }

    #[test]
    fn test_ttl_sets_expiration() {
        let service = JwtService::from_config(&test_config(Some(3600))).unwrap();

        let token = service.issue(7, Role::User).unwrap();
        let claims = service.validate(&token).unwrap();

        let exp = claims.exp.expect("exp should be set");
        assert!(exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = JwtService::from_config(&test_config(None)).unwrap();
        let claims = Claims {
            id: 1,
            role: Role::User,
            iat: 0,
            exp: Some(1),
        };
        let token = encode(&Header::default(), &claims, &service.encoding_key).unwrap();

        assert!(matches!(service.validate(&token), Err(AppError::Forbidden)));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let service = JwtService::from_config(&test_config(None)).unwrap();
        let mut other_config = test_config(None);
        other_config.security.jwt_secret =
            Secret::new("another_secret_key_32_characters_long".to_string());
        let other = JwtService::from_config(&other_config).unwrap();

        let token = other.issue(1, Role::Admin).unwrap();
        assert!(service.validate(&token).is_err());
    }

    #[test]
    fn test_invalid_token_fails() {
        let service = JwtService::from_config(&test_config(None)).unwrap();
        assert!(service.validate("invalid_token").is_err());
    }

    #[test]
    fn test_short_secret_rejected() {
        let mut config = test_config(None);
        config.security.jwt_secret = Secret::new("short".to_string());
        assert!(JwtService::from_config(&config).is_err());
    }
}
