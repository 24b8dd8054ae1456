//! Order repository: the transactional write side of checkout.
//!
//! An order and its payment rows are one logical unit. `create_with_payments`
//! wraps every insert in a single transaction so a reader of the store can
//! never observe an order with a partial payment set.

use chrono::Utc;
use sqlx::PgPool;

use pizzeria_core::{CustomerId, PizzaId};

use super::RepositoryError;
use crate::models::{Order, Payment};

/// Repository for order and payment database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create one order plus one payment row per pizza, atomically.
    ///
    /// Both the order insert and the batch of payment inserts happen inside
    /// one transaction; if any insert fails the whole write rolls back.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert or the commit fails.
    pub async fn create_with_payments(
        &self,
        customer_id: CustomerId,
        pizza_ids: &[PizzaId],
    ) -> Result<(Order, Vec<Payment>), RepositoryError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let order = sqlx::query_as::<_, Order>(
            r"
            INSERT INTO customer_order (customer_id, order_date)
            VALUES ($1, $2)
            RETURNING id, customer_id, order_date
            ",
        )
        .bind(customer_id)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        let mut payments = Vec::with_capacity(pizza_ids.len());
        for &pizza_id in pizza_ids {
            let payment = sqlx::query_as::<_, Payment>(
                r"
                INSERT INTO payment (order_id, pizza_id, payment_date)
                VALUES ($1, $2, $3)
                RETURNING id, order_id, pizza_id, payment_date
                ",
            )
            .bind(order.id)
            .bind(pizza_id)
            .bind(now)
            .fetch_one(&mut *tx)
            .await?;
            payments.push(payment);
        }

        tx.commit().await?;

        Ok((order, payments))
    }
}
