//! Static page shell handlers.
//!
//! The storefront UI is a set of static HTML shells that talk to the JSON
//! API; they are embedded at compile time so the binary has no runtime
//! dependency on the working directory.

use axum::response::{Html, IntoResponse, Redirect};

use crate::middleware::RequireAuth;

/// Menu page.
pub async fn home() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Legacy path: redirect `/home` to `/`.
pub async fn home_redirect() -> Redirect {
    Redirect::to("/")
}

/// Cart page. Requires a logged-in customer.
pub async fn cart(RequireAuth(_customer): RequireAuth) -> impl IntoResponse {
    Html(include_str!("../../static/cart.html"))
}

/// Signup page.
pub async fn signup() -> Html<&'static str> {
    Html(include_str!("../../static/signup.html"))
}

/// Login page.
pub async fn login() -> Html<&'static str> {
    Html(include_str!("../../static/login.html"))
}
