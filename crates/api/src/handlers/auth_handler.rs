//! Login handler.

use axum::{response::Json, routing::post, Router};

use common::AppResult;
use domain::{LoginForm, LoginOut};

use crate::extractors::ValidatedForm;
use crate::state::AppState;

/// Create login routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Validate the login form and echo the username.
///
/// No credentials are checked; there is no user store.
pub async fn login(ValidatedForm(form): ValidatedForm<LoginForm>) -> AppResult<Json<LoginOut>> {
    tracing::info!(username = %form.username, "Login");
    Ok(Json(LoginOut::from(form)))
}
