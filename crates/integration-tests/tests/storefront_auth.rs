//! Integration tests for signup, login, and page gating.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The storefront running (cargo run -p pizzeria-storefront)
//!
//! Run with: cargo test -p pizzeria-integration-tests -- --ignored

use reqwest::{StatusCode, redirect::Policy};
use serde_json::Value;

use pizzeria_integration_tests::{client, signup_and_login, storefront_base_url, unique_email};

#[tokio::test]
#[ignore = "Requires running storefront and database"]
async fn test_signup_rejects_blank_fields() {
    let client = client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/signup"))
        .form(&[
            ("firstname", ""),
            ("lastname", "Customer"),
            ("email", "blank@test.example"),
            ("password", "pass-word-123"),
        ])
        .send()
        .await
        .expect("Failed to sign up");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(body["message"], "the field(s) is empty");
}

#[tokio::test]
#[ignore = "Requires running storefront and database"]
async fn test_signup_rejects_weak_password() {
    let client = client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/signup"))
        .form(&[
            ("firstname", "Test"),
            ("lastname", "Customer"),
            ("email", unique_email("weak-pass").as_str()),
            ("password", "short"),
        ])
        .send()
        .await
        .expect("Failed to sign up");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running storefront and database"]
async fn test_signup_rejects_duplicate_email() {
    let client = client();
    let base_url = storefront_base_url();
    let email = unique_email("duplicate");
    signup_and_login(&client, &email, "pass-word-123").await;

    let resp = client
        .post(format!("{base_url}/signup"))
        .form(&[
            ("firstname", "Test"),
            ("lastname", "Customer"),
            ("email", email.as_str()),
            ("password", "pass-word-123"),
        ])
        .send()
        .await
        .expect("Failed to sign up");

    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "Requires running storefront and database"]
async fn test_login_rejects_wrong_password() {
    let client = client();
    let base_url = storefront_base_url();
    let email = unique_email("wrong-pass");
    signup_and_login(&client, &email, "pass-word-123").await;

    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[("email", email.as_str()), ("password", "not-the-password")])
        .send()
        .await
        .expect("Failed to log in");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running storefront and database"]
async fn test_login_rejects_unknown_email() {
    let client = client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[
            ("email", unique_email("nobody").as_str()),
            ("password", "pass-word-123"),
        ])
        .send()
        .await
        .expect("Failed to log in");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running storefront and database"]
async fn test_cart_page_redirects_anonymous_to_login() {
    // Page requests get a redirect instead of a bare 401
    let client = reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to create HTTP client");
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart page");

    assert!(resp.status().is_redirection());
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("redirect has a location header");
    assert_eq!(location, "/login");
}

#[tokio::test]
#[ignore = "Requires running storefront and database"]
async fn test_logout_ends_the_session() {
    let client = client();
    let base_url = storefront_base_url();
    signup_and_login(&client, &unique_email("logout"), "pass-word-123").await;

    // Authenticated request succeeds
    let resp = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart page");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/logout"))
        .send()
        .await
        .expect("Failed to log out");
    assert!(resp.status().is_success() || resp.status().is_redirection());

    // API mutation now rejected
    let resp = client
        .post(format!("{base_url}/api/menu/1"))
        .send()
        .await
        .expect("Failed to post");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
