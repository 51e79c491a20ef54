//! Order repository (订单数据访问)

use crate::{error::AppError, models::order::*};
use sqlx::PgPool;

pub struct OrderRepository {
    db: PgPool,
}

impl OrderRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 在同一事务中写入订单及其订单项，任一步失败整体回滚
    pub async fn create_with_items(&self, user_id: i64, book_ids: &[i64]) -> Result<i64, AppError> {
        let mut tx = self.db.begin().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to begin transaction");
            AppError::Database(e)
        })?;

        let order_id: i64 =
            sqlx::query_scalar("INSERT INTO orders (user_id) VALUES ($1) RETURNING id")
                .bind(user_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, user_id, "Failed to insert order");
                    AppError::Database(e)
                })?;

        sqlx::query(
            r#"
            INSERT INTO order_items (order_id, book_id)
            SELECT $1, book_id FROM UNNEST($2::BIGINT[]) WITH ORDINALITY AS t(book_id, pos)
            ORDER BY pos
            "#,
        )
        .bind(order_id)
        .bind(book_ids)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, order_id, "Failed to insert order items");
            AppError::Database(e)
        })?;

        // tx 在出错返回时被丢弃，自动回滚
        tx.commit().await.map_err(|e| {
            tracing::error!(error = %e, order_id, "Failed to commit transaction");
            AppError::Database(e)
        })?;

        Ok(order_id)
    }

    /// 获取订单头
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(order)
    }

    /// 用户的订单明细，按下单时间倒序
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<UserOrderRow>, AppError> {
        let rows = sqlx::query_as::<_, UserOrderRow>(
            r#"
            SELECT
                orders.id AS order_id,
                orders.order_date,
                books.title
            FROM orders
            JOIN order_items ON orders.id = order_items.order_id
            JOIN books ON books.id = order_items.book_id
            WHERE orders.user_id = $1
            ORDER BY orders.order_date DESC, orders.id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    /// 单个订单的明细
    pub async fn detail_rows(&self, order_id: i64) -> Result<Vec<OrderDetailRow>, AppError> {
        let rows = sqlx::query_as::<_, OrderDetailRow>(
            r#"
            SELECT
                orders.id AS order_id,
                users.email,
                orders.order_date,
                books.title
            FROM orders
            JOIN users ON users.id = orders.user_id
            JOIN order_items ON orders.id = order_items.order_id
            JOIN books ON books.id = order_items.book_id
            WHERE orders.id = $1
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    /// 全部订单的明细（管理员），按下单时间倒序
    pub async fn all_rows(&self) -> Result<Vec<AdminOrderRow>, AppError> {
        let rows = sqlx::query_as::<_, AdminOrderRow>(
            r#"
            SELECT
                orders.id AS order_id,
                users.email,
                orders.order_date,
                books.title,
                books.price
            FROM orders
            JOIN users ON users.id = orders.user_id
            JOIN order_items ON orders.id = order_items.order_id
            JOIN books ON books.id = order_items.book_id
            ORDER BY orders.order_date DESC, orders.id DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }
}
