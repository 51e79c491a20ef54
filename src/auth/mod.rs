//! Authentication and authorization module

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::{admin_only_middleware, extract_token, jwt_auth_middleware, AuthContext};
pub use password::PasswordHasher;
