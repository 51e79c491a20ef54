//! 图书目录服务

use crate::{error::AppError, models::book::*, repository::book_repo::BookRepository};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, info, instrument};
use validator::Validate;

pub struct CatalogService {
    db: PgPool,
}

impl CatalogService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn repo(&self) -> BookRepository {
        BookRepository::new(self.db.clone())
    }

    pub async fn list_books(&self, query: &BookQuery) -> Result<Vec<Book>, AppError> {
        self.repo().list(query.search_term()).await
    }

    pub async fn get_book(&self, id: i64) -> Result<Book, AppError> {
        self.repo()
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("book"))
    }

    #[instrument(skip(self, req))]
    pub async fn add_book(&self, req: BookRequest) -> Result<Book, AppError> {
        check_request(&req)?;
        let book = self.repo().create(&req).await?;
        info!(book_id = book.id, "Book added");
        Ok(book)
    }

    /// 不存在的 id 不视为错误
    #[instrument(skip(self, req))]
    pub async fn update_book(&self, id: i64, req: BookRequest) -> Result<(), AppError> {
        check_request(&req)?;
        let affected = self.repo().update(id, &req).await?;
        if affected == 0 {
            debug!(book_id = id, "Update matched no book");
        } else {
            info!(book_id = id, "Book updated");
        }
        Ok(())
    }

    /// 不存在的 id 不视为错误
    #[instrument(skip(self))]
    pub async fn delete_book(&self, id: i64) -> Result<(), AppError> {
        let affected = self.repo().delete(id).await?;
        if affected == 0 {
            debug!(book_id = id, "Delete matched no book");
        } else {
            info!(book_id = id, "Book deleted");
        }
        Ok(())
    }
}

fn check_request(req: &BookRequest) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    if req.price < Decimal::ZERO {
        return Err(AppError::validation("Price must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(price: Decimal) -> BookRequest {
        BookRequest {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            price,
            image: None,
        }
    }

    #[test]
    fn test_check_request() {
        assert!(check_request(&request(Decimal::new(999, 2))).is_ok());
        assert!(check_request(&request(Decimal::ZERO)).is_ok());
        assert!(matches!(
            check_request(&request(Decimal::new(-1, 0))),
            Err(AppError::Validation(_))
        ));
    }
}
