//! Book repository (图书数据访问)

use crate::{error::AppError, models::book::*};
use sqlx::PgPool;

pub struct BookRepository {
    db: PgPool,
}

impl BookRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 列出图书，可按书名或作者模糊过滤
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Book>, AppError> {
        let books = if let Some(term) = search {
            sqlx::query_as::<_, Book>(
                r#"
                SELECT * FROM books
                WHERE title ILIKE '%' || $1 || '%' OR author ILIKE '%' || $1 || '%'
                ORDER BY id
                "#,
            )
            .bind(escape_like(term))
            .fetch_all(&self.db)
            .await?
        } else {
            sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
                .fetch_all(&self.db)
                .await?
        };

        Ok(books)
    }

    /// 获取单本图书
    pub async fn get(&self, id: i64) -> Result<Option<Book>, AppError> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(book)
    }

    /// 新增图书
    pub async fn create(&self, req: &BookRequest) -> Result<Book, AppError> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, price, image)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&req.title)
        .bind(&req.author)
        .bind(req.price)
        .bind(req.image_or_default())
        .fetch_one(&self.db)
        .await?;

        Ok(book)
    }

    /// 整体替换图书字段，返回受影响行数
    pub async fn update(&self, id: i64, req: &BookRequest) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $2, author = $3, price = $4, image = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&req.title)
        .bind(&req.author)
        .bind(req.price)
        .bind(req.image_or_default())
        .execute(&self.db)
        .await?;

        Ok(result.rows_affected())
    }

    /// 删除图书，返回受影响行数
    pub async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected())
    }
}

/// 转义 LIKE 通配符，搜索词按字面匹配
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
