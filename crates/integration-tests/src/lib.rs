//! Integration tests for Pizzeria.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations + seed
//! cargo run -p pizzeria-cli -- migrate
//! cargo run -p pizzeria-cli -- seed
//!
//! # Start the storefront
//! cargo run -p pizzeria-storefront
//!
//! # Run integration tests
//! cargo test -p pizzeria-integration-tests -- --ignored
//! ```
//!
//! Tests talk to a running storefront over HTTP with a cookie-holding
//! reqwest client; each test registers its own throwaway customer so tests
//! do not interfere with each other. Tests that verify store writes connect
//! directly to `PostgreSQL` via `STOREFRONT_DATABASE_URL`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use uuid::Uuid;

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create an HTTP client that holds session cookies across requests.
///
/// # Panics
///
/// Panics if the client cannot be built (only happens on TLS backend
/// misconfiguration).
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Generate a unique throwaway email for one test run.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@test.example", Uuid::new_v4())
}

/// Sign up a new customer and log them in on the given client.
///
/// # Panics
///
/// Panics if either request fails or returns a non-success status.
pub async fn signup_and_login(client: &Client, email: &str, password: &str) {
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/signup"))
        .form(&[
            ("firstname", "Test"),
            ("lastname", "Customer"),
            ("email", email),
            ("password", password),
        ])
        .send()
        .await
        .expect("Failed to sign up");
    assert!(
        resp.status().is_success() || resp.status().is_redirection(),
        "signup failed with {}",
        resp.status()
    );

    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[("email", email), ("password", password)])
        .send()
        .await
        .expect("Failed to log in");
    assert!(
        resp.status().is_success() || resp.status().is_redirection(),
        "login failed with {}",
        resp.status()
    );
}

/// Connect to the storefront database for direct store verification.
///
/// # Panics
///
/// Panics if `STOREFRONT_DATABASE_URL` (or `DATABASE_URL`) is unset or the
/// connection fails.
pub async fn database_pool() -> PgPool {
    let database_url = std::env::var("STOREFRONT_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .expect("STOREFRONT_DATABASE_URL must be set for store verification");

    PgPool::connect(database_url.expose_secret())
        .await
        .expect("Failed to connect to storefront database")
}

/// Count the orders and payments belonging to one customer email.
///
/// # Panics
///
/// Panics if the queries fail.
pub async fn order_and_payment_counts(pool: &PgPool, email: &str) -> (i64, i64) {
    let (orders,): (i64,) = sqlx::query_as(
        r"
        SELECT COUNT(*)
        FROM customer_order o
        JOIN customer c ON c.id = o.customer_id
        WHERE c.email = $1
        ",
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .expect("Failed to count orders");

    let (payments,): (i64,) = sqlx::query_as(
        r"
        SELECT COUNT(*)
        FROM payment p
        JOIN customer_order o ON o.id = p.order_id
        JOIN customer c ON c.id = o.customer_id
        WHERE c.email = $1
        ",
    )
    .bind(email)
    .fetch_one(pool)
    .await
    .expect("Failed to count payments");

    (orders, payments)
}
