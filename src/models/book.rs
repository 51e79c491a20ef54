//! Book catalog models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Book row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// 序列化为字符串，例如 "12.50"
    pub price: Decimal,
    pub image: String,
}

/// Create or full-replace request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub price: Decimal,
    pub image: Option<String>,
}

impl BookRequest {
    /// Image URL to store; omitted or null becomes an empty string
    pub fn image_or_default(&self) -> &str {
        self.image.as_deref().unwrap_or("")
    }
}

/// List filter
#[derive(Debug, Default, Deserialize)]
pub struct BookQuery {
    /// Case-insensitive match on title or author
    pub q: Option<String>,
}

impl BookQuery {
    pub fn search_term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}
