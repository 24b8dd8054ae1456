//! Customer domain types.

use chrono::{DateTime, Utc};

use pizzeria_core::{CustomerId, Email};

/// A registered customer (domain type).
///
/// The password hash lives in a separate table and never travels with this
/// type.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Customer {
    /// Unique customer ID.
    pub id: CustomerId,
    /// Customer's first name.
    pub first_name: String,
    /// Customer's last name.
    pub last_name: String,
    /// Customer's email address (unique).
    pub email: Email,
    /// When the customer signed up.
    pub created_at: DateTime<Utc>,
}
