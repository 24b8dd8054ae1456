//! Cart route handlers.
//!
//! Every handler resolves the session's cart id first and goes through the
//! injected [`CartStore`](crate::cart::CartStore); carts are never global.

use axum::{
    Json,
    extract::{Path, State},
};
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use pizzeria_core::{PizzaId, Price};

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{Pizza, session_keys};
use crate::services::checkout::CheckoutService;
use crate::state::AppState;

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the session's cart id, creating and storing one on first use.
///
/// The id keys the session's cart inside the shared
/// [`CartStore`](crate::cart::CartStore).
pub(crate) async fn cart_id(session: &Session) -> String {
    if let Ok(Some(id)) = session.get::<String>(session_keys::CART_ID).await {
        return id;
    }

    let id = Uuid::new_v4().to_string();
    if let Err(e) = session.insert(session_keys::CART_ID, &id).await {
        tracing::error!("Failed to save cart id to session: {e}");
    }
    id
}

// =============================================================================
// Handlers
// =============================================================================

/// Current cart snapshot, in insertion order.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Json<Vec<Pizza>> {
    let cart_id = cart_id(&session).await;
    Json(state.carts().snapshot(&cart_id))
}

/// Cart total, recomputed from the current contents.
#[instrument(skip(state, session))]
pub async fn price(State(state): State<AppState>, session: Session) -> Json<Price> {
    let cart_id = cart_id(&session).await;
    Json(state.carts().price(&cart_id))
}

/// Remove the first matching pizza from the cart.
///
/// Returns 404 if the id is not currently in the cart.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Json<Pizza>> {
    let cart_id = cart_id(&session).await;
    let removed = state
        .carts()
        .remove(&cart_id, PizzaId::new(id))
        .ok_or_else(|| AppError::NotFound(format!("pizza {id} not in cart")))?;

    Ok(Json(removed))
}

/// Checkout: convert the session's cart into an order plus payment rows.
///
/// Requires authentication. Fails with 400 if the cart is empty. On success
/// the committed snapshot is returned and the cart is cleared.
#[instrument(skip(state, session))]
pub async fn payment(
    RequireAuth(customer): RequireAuth,
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<Pizza>>> {
    let cart_id = cart_id(&session).await;
    let items = state.carts().snapshot(&cart_id);

    CheckoutService::new(state.pool())
        .checkout(&customer.email, &items)
        .await?;

    // The order is durable; drop the committed cart so the next request
    // starts fresh.
    state.carts().clear(&cart_id);

    Ok(Json(items))
}
