//! Validated urlencoded form extractor.

use axum::{
    async_trait,
    extract::{FromRequest, RawForm, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::AppError;

use super::from_urlencoded;

/// Form extractor that validates the decoded fields.
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let RawForm(bytes) = RawForm::from_request(req, state)
            .await
            .map_err(|e| AppError::from_rejection(e.status(), e.body_text()))?;

        let value: T = from_urlencoded(&bytes, "form")?;
        value.validate()?;

        Ok(ValidatedForm(value))
    }
}
