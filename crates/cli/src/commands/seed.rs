//! Seed the pizza catalog from a YAML menu file.
//!
//! The menu file is the source of truth for the catalog; seeding is
//! idempotent - existing pizzas are updated by name, new ones inserted.
//!
//! ```yaml
//! pizzas:
//!   - name: Margherita
//!     price: "8.00"
//!   - name: Pepperoni
//!     price: "9.50"
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;

use pizzeria_core::{Price, PriceError};

/// Errors that can occur while seeding the menu.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Menu file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read menu file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse menu file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid price for '{name}': {source}")]
    InvalidPrice {
        name: String,
        #[source]
        source: PriceError,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The YAML menu file layout.
#[derive(Debug, Deserialize)]
struct MenuConfig {
    pizzas: Vec<MenuPizza>,
}

/// One pizza entry in the menu file.
#[derive(Debug, Deserialize)]
struct MenuPizza {
    name: String,
    price: Decimal,
}

/// Seed the pizza catalog from a YAML file.
///
/// # Errors
///
/// Returns `SeedError` if the file is missing or malformed, a price is
/// negative, or a database operation fails.
pub async fn menu(file_path: &str) -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("STOREFRONT_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| SeedError::MissingEnvVar("STOREFRONT_DATABASE_URL"))?;

    let path = Path::new(file_path);
    if !path.exists() {
        return Err(SeedError::FileNotFound(file_path.to_owned()));
    }

    info!(path = %file_path, "Loading menu from file");

    // Read and validate the YAML before connecting to the database
    let content = tokio::fs::read_to_string(path).await?;
    let config: MenuConfig = serde_yaml::from_str(&content)?;

    let mut validated = Vec::with_capacity(config.pizzas.len());
    for entry in config.pizzas {
        let price = Price::new(entry.price).map_err(|source| SeedError::InvalidPrice {
            name: entry.name.clone(),
            source,
        })?;
        validated.push((entry.name, price));
    }

    info!(pizzas = validated.len(), "Parsed menu");

    let pool = PgPool::connect(database_url.expose_secret()).await?;
    info!("Connected to database");

    let mut inserted = 0_u32;
    let mut updated = 0_u32;
    for (name, price) in &validated {
        let result = sqlx::query(
            r"
            INSERT INTO pizza (name, price)
            VALUES ($1, $2)
            ON CONFLICT (name) DO UPDATE SET price = EXCLUDED.price
            RETURNING (xmax = 0) AS is_insert
            ",
        )
        .bind(name)
        .bind(price)
        .fetch_one(&pool)
        .await?;

        let is_insert: bool = sqlx::Row::get(&result, "is_insert");
        if is_insert {
            inserted += 1;
        } else {
            updated += 1;
        }
    }

    info!("Seeding complete!");
    info!("  Pizzas inserted: {inserted}");
    info!("  Pizzas updated: {updated}");

    Ok(())
}
