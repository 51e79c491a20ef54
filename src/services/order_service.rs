//! 订单服务：下单与三种订单视图

use crate::{
    auth::AuthContext, error::AppError, models::order::*,
    repository::order_repo::OrderRepository,
};
use sqlx::PgPool;
use tracing::{info, instrument};

pub struct OrderService {
    db: PgPool,
}

impl OrderService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn repo(&self) -> OrderRepository {
        OrderRepository::new(self.db.clone())
    }

    /// 下单，购物车为空时拒绝且不写库
    #[instrument(skip(self, req))]
    pub async fn create_order(
        &self,
        user_id: i64,
        req: CreateOrderRequest,
    ) -> Result<CreateOrderResponse, AppError> {
        let book_ids = cart_book_ids(req)?;

        let order_id = self.repo().create_with_items(user_id, &book_ids).await?;

        metrics::counter!("orders_created_total").increment(1);
        info!(order_id, item_count = book_ids.len(), "Order created");

        Ok(CreateOrderResponse {
            message: "Order created successfully".to_string(),
            order_id,
        })
    }

    /// 用户订单明细（未分组）
    pub async fn get_user_orders(
        &self,
        auth: &AuthContext,
        user_id: i64,
    ) -> Result<Vec<UserOrderRow>, AppError> {
        auth.require_owner_or_admin(user_id)?;
        self.repo().list_for_user(user_id).await
    }

    /// 单个订单明细，未知订单返回空列表
    pub async fn get_order_by_id(
        &self,
        auth: &AuthContext,
        order_id: i64,
    ) -> Result<Vec<OrderDetailRow>, AppError> {
        let repo = self.repo();

        let Some(order) = repo.find_by_id(order_id).await? else {
            return Ok(Vec::new());
        };
        auth.require_owner_or_admin(order.user_id)?;

        repo.detail_rows(order_id).await
    }

    /// 全部订单（管理员），按订单分组
    pub async fn get_all_orders(&self, auth: &AuthContext) -> Result<Vec<OrderSummary>, AppError> {
        auth.require_admin()?;
        let rows = self.repo().all_rows().await?;
        Ok(OrderSummary::group(rows))
    }
}

fn cart_book_ids(req: CreateOrderRequest) -> Result<Vec<i64>, AppError> {
    let book_ids: Vec<i64> = req
        .cart
        .unwrap_or_default()
        .into_iter()
        .map(|item| item.book_id)
        .collect();

    if book_ids.is_empty() {
        return Err(AppError::validation("Cart is empty"));
    }

    Ok(book_ids)
}
