//! Customer repository for database operations.
//!
//! Customers and their password hashes live in separate tables; the hash is
//! only ever read through [`CustomerRepository::get_password_hash`].

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use pizzeria_core::{CustomerId, Email};

use super::RepositoryError;
use crate::models::Customer;

/// Customer row joined with its password hash.
#[derive(sqlx::FromRow)]
struct CustomerPasswordRow {
    id: CustomerId,
    first_name: String,
    last_name: String,
    email: Email,
    created_at: DateTime<Utc>,
    password_hash: String,
}

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a customer by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<Customer>, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(
            r"
            SELECT id, first_name, last_name, email, created_at
            FROM customer
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(customer)
    }

    /// Create a new customer with a password hash, in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create_with_password(
        &self,
        first_name: &str,
        last_name: &str,
        email: &Email,
        password_hash: &str,
    ) -> Result<Customer, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        // Create customer
        let customer = sqlx::query_as::<_, Customer>(
            r"
            INSERT INTO customer (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, email, created_at
            ",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        // Create password entry
        sqlx::query(
            r"
            INSERT INTO customer_password (customer_id, password_hash)
            VALUES ($1, $2)
            ",
        )
        .bind(customer.id)
        .bind(password_hash)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(customer)
    }

    /// Get a customer's password hash by email.
    ///
    /// Returns `None` if the customer doesn't exist or has no password set.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(Customer, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerPasswordRow>(
            r"
            SELECT c.id, c.first_name, c.last_name, c.email, c.created_at,
                   p.password_hash
            FROM customer c
            JOIN customer_password p ON c.id = p.customer_id
            WHERE c.email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| {
            (
                Customer {
                    id: r.id,
                    first_name: r.first_name,
                    last_name: r.last_name,
                    email: r.email,
                    created_at: r.created_at,
                },
                r.password_hash,
            )
        }))
    }
}
