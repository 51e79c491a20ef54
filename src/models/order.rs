//! Order models and the admin grouping of flat join rows

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cart entry sent at checkout
#[derive(Debug, Clone, Deserialize)]
pub struct CartItem {
    #[serde(rename = "bookId")]
    pub book_id: i64,
}

/// Checkout request
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub cart: Option<Vec<CartItem>>,
}

#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub message: String,
    #[serde(rename = "orderId")]
    pub order_id: i64,
}

/// Order header row, used for ownership checks
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub order_date: DateTime<Utc>,
}

/// One item line of a user's order history
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct UserOrderRow {
    pub order_id: i64,
    pub order_date: DateTime<Utc>,
    pub title: String,
}

/// One item line of a single order
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct OrderDetailRow {
    pub order_id: i64,
    pub email: String,
    pub order_date: DateTime<Utc>,
    pub title: String,
}

/// One item line across all orders
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct AdminOrderRow {
    pub order_id: i64,
    pub email: String,
    pub order_date: DateTime<Utc>,
    pub title: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub title: String,
    pub price: Decimal,
}

/// One order with its item lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub id: i64,
    pub email: String,
    pub order_date: DateTime<Utc>,
    pub items: Vec<OrderLine>,
    pub total: Decimal,
}

impl OrderSummary {
    /// Group rows by order id.
    ///
    /// Groups come out in order of first appearance and items keep row order.
    pub fn group(rows: Vec<AdminOrderRow>) -> Vec<OrderSummary> {
        let mut index: HashMap<i64, usize> = HashMap::new();
        let mut orders: Vec<OrderSummary> = Vec::new();

        for row in rows {
            let slot = *index.entry(row.order_id).or_insert_with(|| {
                orders.push(OrderSummary {
                    id: row.order_id,
                    email: row.email.clone(),
                    order_date: row.order_date,
                    items: Vec::new(),
                    total: Decimal::ZERO,
                });
                orders.len() - 1
            });

            let order = &mut orders[slot];
            order.total += row.price;
            order.items.push(OrderLine {
                title: row.title,
                price: row.price,
            });
        }

        orders
    }
}
