//! Pizza catalog repository.
//!
//! The catalog is the read-only lookup side of the menu: rows are seeded via
//! the CLI and never mutated by the storefront.

use sqlx::PgPool;

use pizzeria_core::PizzaId;

use super::RepositoryError;
use crate::models::Pizza;

/// Repository for pizza catalog lookups.
pub struct PizzaRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PizzaRepository<'a> {
    /// Create a new pizza repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the full menu in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Pizza>, RepositoryError> {
        let pizzas = sqlx::query_as::<_, Pizza>(
            r"
            SELECT id, name, price
            FROM pizza
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(pizzas)
    }

    /// Look up a single pizza by its catalog id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: PizzaId) -> Result<Option<Pizza>, RepositoryError> {
        let pizza = sqlx::query_as::<_, Pizza>(
            r"
            SELECT id, name, price
            FROM pizza
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(pizza)
    }
}
