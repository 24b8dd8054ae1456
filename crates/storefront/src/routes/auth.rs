//! Authentication route handlers.
//!
//! Handles signup, login, and logout. The session only ever stores the
//! minimal [`CurrentCustomer`](crate::models::CurrentCustomer) identity.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::{clear_current_customer, set_current_customer};
use crate::models::CurrentCustomer;
use crate::services::auth::AuthService;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Signup form data.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle signup form submission.
///
/// Blank fields are rejected before any validation; duplicate emails come
/// back as a conflict.
#[instrument(skip(state, form))]
pub async fn signup(State(state): State<AppState>, Form(form): Form<SignupForm>) -> Result<Response> {
    if [&form.firstname, &form.lastname, &form.email, &form.password]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(AppError::BadRequest("the field(s) is empty".to_owned()));
    }

    AuthService::new(state.pool())
        .register(&form.firstname, &form.lastname, &form.email, &form.password)
        .await?;

    Ok(Redirect::to("/").into_response())
}

/// Handle login form submission.
///
/// On success the customer identity is stored in the session and the client
/// is redirected to the menu.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    if form.email.trim().is_empty() || form.password.trim().is_empty() {
        return Err(AppError::BadRequest("the field(s) is empty".to_owned()));
    }

    let customer = AuthService::new(state.pool())
        .login(&form.email, &form.password)
        .await?;

    let current = CurrentCustomer {
        id: customer.id,
        email: customer.email,
    };
    set_current_customer(&session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("failed to set session: {e}")))?;

    tracing::info!(customer_id = %current.id, "customer logged in");

    Ok(Redirect::to("/").into_response())
}

/// Handle logout.
///
/// Clears the session identity and sends the client back to the login page.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Response> {
    clear_current_customer(&session)
        .await
        .map_err(|e| AppError::Internal(format!("failed to clear session: {e}")))?;

    Ok(Redirect::to("/login").into_response())
}
