//! Validated query string extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::AppError;

use super::from_urlencoded;

/// Query extractor that validates the decoded parameters.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();

        let value: T = from_urlencoded(query.as_bytes(), "query")?;
        value.validate()?;

        Ok(ValidatedQuery(value))
    }
}
