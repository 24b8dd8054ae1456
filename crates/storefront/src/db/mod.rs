//! Database operations for storefront `PostgreSQL`.
//!
//! ## Tables
//!
//! - `pizza` - The menu catalog (read-only at runtime, seeded via the CLI)
//! - `customer` - Registered customers
//! - `customer_password` - Argon2 password hashes, one row per customer
//! - `customer_order` - Committed orders
//! - `payment` - Payment rows, one per cart item, children of an order
//! - `tower_sessions.session` - Session storage (managed by tower-sessions)
//!
//! Queries bind parameters at runtime; row structs derive `sqlx::FromRow`.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p pizzeria-cli -- migrate
//! ```

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub mod customers;
pub mod orders;
pub mod pizzas;

pub use customers::CustomerRepository;
pub use orders::OrderRepository;
pub use pizzas::PizzaRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
