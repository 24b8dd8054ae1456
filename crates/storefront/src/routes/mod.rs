//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Menu page
//! GET  /home                   - Redirect to /
//! GET  /cart                   - Cart page (requires auth)
//! GET  /health                 - Health check (wired in main)
//!
//! # Auth
//! GET  /signup                 - Signup page
//! POST /signup                 - Signup action
//! GET  /login                  - Login page
//! POST /login                  - Login action
//! GET  /logout                 - Logout action
//!
//! # API
//! GET    /api/menu             - Full menu (JSON)
//! POST   /api/menu/{id}        - Add pizza to cart (requires auth)
//! GET    /api/cart             - Current cart snapshot (JSON)
//! GET    /api/cart/price       - Cart total
//! DELETE /api/cart/{id}        - Remove pizza from cart
//! POST   /api/cart/payment     - Checkout (requires auth)
//! ```

pub mod auth;
pub mod cart;
pub mod menu;
pub mod pages;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::middleware;
use crate::state::AppState;

/// Create the page routes router.
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/home", get(pages::home_redirect))
        .route("/cart", get(pages::cart))
}

/// Create the auth routes router.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", get(pages::signup).post(auth::signup))
        .route("/login", get(pages::login).post(auth::login))
        .route("/logout", get(auth::logout))
        .layer(middleware::auth_rate_limiter())
}

/// Create the JSON API routes router.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/menu", get(menu::list))
        .route("/menu/{id}", post(menu::add_to_cart))
        .route("/cart", get(cart::show))
        .route("/cart/price", get(cart::price))
        .route("/cart/{id}", delete(cart::remove))
        .route("/cart/payment", post(cart::payment))
        .layer(middleware::api_rate_limiter())
}

/// Create the full storefront router.
#[must_use]
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        .merge(auth_routes())
        .nest("/api", api_routes())
}
