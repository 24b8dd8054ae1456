//! Pizza catalog domain type.

use serde::{Deserialize, Serialize};

use pizzeria_core::{PizzaId, Price};

/// A pizza on the menu.
///
/// Owned by the catalog table and immutable once loaded; carts hold copies
/// of the catalog row, referenced by id at checkout time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Pizza {
    /// Catalog-assigned pizza ID.
    pub id: PizzaId,
    /// Display name (e.g., "Margherita").
    pub name: String,
    /// Menu price.
    pub price: Price,
}
