//! Integration tests for menu browsing and cart mutation.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - A seeded menu (pz-cli seed)
//! - The storefront running (cargo run -p pizzeria-storefront)
//!
//! Run with: cargo test -p pizzeria-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::Value;

use pizzeria_integration_tests::{client, signup_and_login, storefront_base_url, unique_email};

/// Parse a price value (serialized as a decimal string) into an f64.
fn price_of(value: &Value) -> f64 {
    value
        .as_str()
        .expect("price should be a decimal string")
        .parse()
        .expect("price should parse as a number")
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_menu_lists_seeded_pizzas() {
    let client = client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/api/menu"))
        .send()
        .await
        .expect("Failed to get menu");

    assert_eq!(resp.status(), StatusCode::OK);
    let menu: Vec<Value> = resp.json().await.expect("Failed to parse menu");
    assert!(!menu.is_empty(), "seeded menu should not be empty");

    let first = menu.first().expect("menu has at least one pizza");
    assert!(first["id"].is_i64());
    assert!(first["name"].is_string());
    assert!(price_of(&first["price"]) >= 0.0);
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_cart_starts_empty() {
    let client = client();
    let base_url = storefront_base_url();

    let cart: Vec<Value> = client
        .get(format!("{base_url}/api/cart"))
        .send()
        .await
        .expect("Failed to get cart")
        .json()
        .await
        .expect("Failed to parse cart");
    assert!(cart.is_empty());

    let price: Value = client
        .get(format!("{base_url}/api/cart/price"))
        .send()
        .await
        .expect("Failed to get price")
        .json()
        .await
        .expect("Failed to parse price");
    assert!((price_of(&price) - 0.0).abs() < f64::EPSILON);
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_add_to_cart_requires_auth() {
    let client = client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/api/menu/1"))
        .send()
        .await
        .expect("Failed to post");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_add_unknown_pizza_is_not_found() {
    let client = client();
    let base_url = storefront_base_url();
    signup_and_login(&client, &unique_email("cart-404"), "pass-word-123").await;

    let resp = client
        .post(format!("{base_url}/api/menu/999999"))
        .send()
        .await
        .expect("Failed to post");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Cart unchanged
    let cart: Vec<Value> = client
        .get(format!("{base_url}/api/cart"))
        .send()
        .await
        .expect("Failed to get cart")
        .json()
        .await
        .expect("Failed to parse cart");
    assert!(cart.is_empty());
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_cart_price_tracks_contents() {
    let client = client();
    let base_url = storefront_base_url();
    signup_and_login(&client, &unique_email("cart-price"), "pass-word-123").await;

    let menu: Vec<Value> = client
        .get(format!("{base_url}/api/menu"))
        .send()
        .await
        .expect("Failed to get menu")
        .json()
        .await
        .expect("Failed to parse menu");
    let first = menu.first().expect("menu has at least two pizzas");
    let second = menu.get(1).expect("menu has at least two pizzas");

    // Add two pizzas
    for pizza in [first, second] {
        let resp = client
            .post(format!("{base_url}/api/menu/{}", pizza["id"]))
            .send()
            .await
            .expect("Failed to add to cart");
        assert_eq!(resp.status(), StatusCode::OK);
        let added: Value = resp.json().await.expect("Failed to parse added pizza");
        assert_eq!(added["id"], pizza["id"]);
    }

    // Price equals the sum of the two menu prices
    let expected = price_of(&first["price"]) + price_of(&second["price"]);
    let price: Value = client
        .get(format!("{base_url}/api/cart/price"))
        .send()
        .await
        .expect("Failed to get price")
        .json()
        .await
        .expect("Failed to parse price");
    assert!((price_of(&price) - expected).abs() < 1e-9);

    // Remove the first pizza; only the second remains
    let resp = client
        .delete(format!("{base_url}/api/cart/{}", first["id"]))
        .send()
        .await
        .expect("Failed to remove from cart");
    assert_eq!(resp.status(), StatusCode::OK);

    let cart: Vec<Value> = client
        .get(format!("{base_url}/api/cart"))
        .send()
        .await
        .expect("Failed to get cart")
        .json()
        .await
        .expect("Failed to parse cart");
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.first().expect("one pizza left")["id"], second["id"]);

    let price: Value = client
        .get(format!("{base_url}/api/cart/price"))
        .send()
        .await
        .expect("Failed to get price")
        .json()
        .await
        .expect("Failed to parse price");
    assert!((price_of(&price) - price_of(&second["price"])).abs() < 1e-9);
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_remove_not_in_cart_is_not_found() {
    let client = client();
    let base_url = storefront_base_url();

    let resp = client
        .delete(format!("{base_url}/api/cart/1"))
        .send()
        .await
        .expect("Failed to send delete");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(body["message"], "not found");
}
