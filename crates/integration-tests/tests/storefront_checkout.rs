//! Integration tests for the checkout workflow.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - A seeded menu (pz-cli seed)
//! - The storefront running (cargo run -p pizzeria-storefront)
//! - `STOREFRONT_DATABASE_URL` set, for direct store verification
//!
//! Run with: cargo test -p pizzeria-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::Value;

use pizzeria_integration_tests::{
    client, database_pool, order_and_payment_counts, signup_and_login, storefront_base_url,
    unique_email,
};

/// Add the pizza with the given menu id to the session cart.
async fn add_to_cart(client: &reqwest::Client, base_url: &str, id: &Value) {
    let resp = client
        .post(format!("{base_url}/api/menu/{id}"))
        .send()
        .await
        .expect("Failed to add to cart");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_checkout_requires_auth() {
    let client = client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/api/cart/payment"))
        .send()
        .await
        .expect("Failed to post payment");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_empty_cart_checkout_is_rejected_with_zero_writes() {
    let client = client();
    let base_url = storefront_base_url();
    let email = unique_email("checkout-empty");
    signup_and_login(&client, &email, "pass-word-123").await;

    let resp = client
        .post(format!("{base_url}/api/cart/payment"))
        .send()
        .await
        .expect("Failed to post payment");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(body["message"], "cart is empty");

    // Nothing reached the order store
    let pool = database_pool().await;
    assert_eq!(order_and_payment_counts(&pool, &email).await, (0, 0));
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_checkout_creates_one_order_and_one_payment_per_item() {
    let client = client();
    let base_url = storefront_base_url();
    let email = unique_email("checkout-commit");
    signup_and_login(&client, &email, "pass-word-123").await;

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

    add_to_cart(&client, &base_url, &first["id"]).await;
    add_to_cart(&client, &base_url, &second["id"]).await;

    let resp = client
        .post(format!("{base_url}/api/cart/payment"))
        .send()
        .await
        .expect("Failed to post payment");
    assert_eq!(resp.status(), StatusCode::OK);

    // The response is the committed snapshot
    let committed: Vec<Value> = resp.json().await.expect("Failed to parse snapshot");
    assert_eq!(committed.len(), 2);
    assert_eq!(committed.first().expect("two items")["id"], first["id"]);
    assert_eq!(committed.get(1).expect("two items")["id"], second["id"]);

    // Exactly one order and one payment per cart item
    let pool = database_pool().await;
    assert_eq!(order_and_payment_counts(&pool, &email).await, (1, 2));
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_payment_clears_cart_after_commit() {
    // Named behavior choice: a successful payment drops the cart; the
    // committed snapshot in the response is the record of what was bought.
    let client = client();
    let base_url = storefront_base_url();
    let email = unique_email("checkout-clears");
    signup_and_login(&client, &email, "pass-word-123").await;

    let menu: Vec<Value> = client
        .get(format!("{base_url}/api/menu"))
        .send()
        .await
        .expect("Failed to get menu")
        .json()
        .await
        .expect("Failed to parse menu");
    add_to_cart(&client, &base_url, &menu.first().expect("seeded menu")["id"]).await;

    let resp = client
        .post(format!("{base_url}/api/cart/payment"))
        .send()
        .await
        .expect("Failed to post payment");
    assert_eq!(resp.status(), StatusCode::OK);

    let cart: Vec<Value> = client
        .get(format!("{base_url}/api/cart"))
        .send()
        .await
        .expect("Failed to get cart")
        .json()
        .await
        .expect("Failed to parse cart");
    assert!(cart.is_empty(), "cart should be empty after checkout");
}

#[tokio::test]
#[ignore = "Requires running storefront and seeded database"]
async fn test_remove_then_checkout_scenario() {
    // Two pizzas in the cart, one removed, then checkout: the committed
    // order covers only the remaining pizza.
    let client = client();
    let base_url = storefront_base_url();
    let email = unique_email("checkout-scenario");
    signup_and_login(&client, &email, "pass-word-123").await;

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

    add_to_cart(&client, &base_url, &first["id"]).await;
    add_to_cart(&client, &base_url, &second["id"]).await;

    let resp = client
        .delete(format!("{base_url}/api/cart/{}", first["id"]))
        .send()
        .await
        .expect("Failed to remove from cart");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{base_url}/api/cart/payment"))
        .send()
        .await
        .expect("Failed to post payment");
    assert_eq!(resp.status(), StatusCode::OK);

    let committed: Vec<Value> = resp.json().await.expect("Failed to parse snapshot");
    assert_eq!(committed.len(), 1);
    assert_eq!(committed.first().expect("one item")["id"], second["id"]);

    let pool = database_pool().await;
    assert_eq!(order_and_payment_counts(&pool, &email).await, (1, 1));
}
