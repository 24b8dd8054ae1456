//! Order and payment domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use pizzeria_core::{CustomerId, OrderId, PaymentId, PizzaId};

/// A committed order.
///
/// Created exactly once per successful checkout and never mutated after.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Customer the order belongs to.
    pub customer_id: CustomerId,
    /// When the order was placed.
    pub order_date: DateTime<Utc>,
}

/// A payment row, one per cart item at checkout time.
///
/// Payments have no independent existence outside their order; they are
/// written in the same transaction that creates the order.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Payment {
    /// Unique payment ID.
    pub id: PaymentId,
    /// Order this payment belongs to.
    pub order_id: OrderId,
    /// Pizza the payment covers.
    pub pizza_id: PizzaId,
    /// When the payment was recorded.
    pub payment_date: DateTime<Utc>,
}
