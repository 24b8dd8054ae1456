//! Checkout service: converts a cart snapshot into a durable order.
//!
//! The service owns the checkout preconditions and the resolution of the
//! authenticated email to a customer row; the transactional write itself
//! lives in [`OrderRepository`](crate::db::orders::OrderRepository).

use sqlx::PgPool;
use thiserror::Error;

use pizzeria_core::{Email, PizzaId};

use crate::db::RepositoryError;
use crate::db::customers::CustomerRepository;
use crate::db::orders::OrderRepository;
use crate::models::{Order, Payment, Pizza};

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart held no items at checkout time.
    #[error("cart is empty")]
    EmptyCart,

    /// The authenticated email has no customer row.
    ///
    /// Authentication implies a customer row exists, so a miss here is a
    /// consistency fault in the account pipeline, not a user error.
    #[error("no customer record for authenticated email {0}")]
    CustomerMissing(Email),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Checkout service.
///
/// Validates the cart snapshot, resolves the paying customer, and performs
/// the atomic order-plus-payments write.
pub struct CheckoutService<'a> {
    customers: CustomerRepository<'a>,
    orders: OrderRepository<'a>,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            customers: CustomerRepository::new(pool),
            orders: OrderRepository::new(pool),
        }
    }

    /// Convert the given cart snapshot into one order and one payment per item.
    ///
    /// The emptiness check runs before any store access, so a failed
    /// precondition performs zero writes.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` if the snapshot holds no items.
    /// Returns `CheckoutError::CustomerMissing` if the email resolves to no
    /// customer row.
    /// Returns `CheckoutError::Repository` if the transactional write fails.
    pub async fn checkout(
        &self,
        email: &Email,
        items: &[Pizza],
    ) -> Result<(Order, Vec<Payment>), CheckoutError> {
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let customer = self
            .customers
            .get_by_email(email)
            .await?
            .ok_or_else(|| CheckoutError::CustomerMissing(email.clone()))?;

        let pizza_ids: Vec<PizzaId> = items.iter().map(|p| p.id).collect();
        let (order, payments) = self
            .orders
            .create_with_payments(customer.id, &pizza_ids)
            .await?;

        tracing::info!(
            order_id = %order.id,
            customer_id = %customer.id,
            payments = payments.len(),
            "checkout committed"
        );

        Ok((order, payments))
    }
}
