//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use common::AppError;

use super::schema_error;

/// JSON extractor that automatically validates the payload.
///
/// The body is first read as a generic JSON value so syntax and content
/// type problems keep the framework's rejection. The value is then
/// deserialized into `T` with the failing field path tracked.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use validator::Validate;
/// use person_api_lib::extractors::ValidatedJson;
///
/// #[derive(Deserialize, Validate)]
/// struct Rename {
///     #[validate(length(min = 1, max = 50))]
///     first_name: String,
/// }
///
/// async fn rename(ValidatedJson(payload): ValidatedJson<Rename>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::from_rejection(e.status(), e.body_text()))?;

        let value: T =
            serde_path_to_error::deserialize(body).map_err(|e| schema_error(e, "body"))?;
        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
