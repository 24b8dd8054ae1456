//! Menu route handlers.
//!
//! The menu is the read-only catalog; adding to the cart resolves the pizza
//! against the catalog before touching the session's cart.

use axum::{
    Json,
    extract::{Path, State},
};
use tower_sessions::Session;
use tracing::instrument;

use pizzeria_core::PizzaId;

use crate::db::pizzas::PizzaRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::Pizza;
use crate::state::AppState;

use super::cart::cart_id;

/// Full menu, in catalog order.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Pizza>>> {
    let pizzas = PizzaRepository::new(state.pool()).list().await?;
    Ok(Json(pizzas))
}

/// Add a pizza from the menu to the session's cart.
///
/// Requires authentication. Returns 404 if the id is unknown to the catalog;
/// otherwise returns the added pizza.
#[instrument(skip(state, session))]
pub async fn add_to_cart(
    RequireAuth(_customer): RequireAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Json<Pizza>> {
    let pizza = PizzaRepository::new(state.pool())
        .get_by_id(PizzaId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("pizza {id} not on the menu")))?;

    let cart_id = cart_id(&session).await;
    state.carts().add(&cart_id, pizza.clone());

    Ok(Json(pizza))
}
