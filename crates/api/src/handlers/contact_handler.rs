//! Contact form handler.

use axum::{response::Json, routing::post, Router};
use axum_extra::{extract::CookieJar, headers::UserAgent, TypedHeader};
use serde::{Deserialize, Serialize};

use common::AppResult;
use domain::ContactMessage;

use crate::extractors::ValidatedForm;
use crate::state::AppState;

/// Cookie carrying the advertising preference
pub const ADS_COOKIE: &str = "ads";

/// What the contact endpoint echoes back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub user_agent: Option<String>,
}

/// Create contact routes
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact))
}

/// Accept a contact message and echo the caller's user agent.
pub async fn contact(
    user_agent: Option<TypedHeader<UserAgent>>,
    cookies: CookieJar,
    ValidatedForm(message): ValidatedForm<ContactMessage>,
) -> AppResult<Json<ContactReceipt>> {
    let ads = cookies.get(ADS_COOKIE).map(|c| c.value().to_string());
    tracing::debug!(
        email = %message.email,
        ads = ?ads,
        "Contact message received"
    );

    Ok(Json(ContactReceipt {
        user_agent: user_agent.map(|TypedHeader(ua)| ua.as_str().to_string()),
    }))
}
