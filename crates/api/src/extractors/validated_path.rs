//! Validated path parameter extractor.

use axum::{
    async_trait,
    extract::{path::ErrorKind, rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::AppError;

/// Path extractor that validates the captured segments.
///
/// The target struct's field names must match the route's `:param` names.
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(path_error)?;

        value.validate()?;

        Ok(ValidatedPath(value))
    }
}

/// Report unparseable segments against their parameter name.
fn path_error(rejection: PathRejection) -> AppError {
    let err = match rejection {
        PathRejection::FailedToDeserializePathParams(err) => err,
        other => return AppError::from_rejection(other.status(), other.body_text()),
    };

    match err.kind() {
        ErrorKind::ParseErrorAtKey {
            key,
            value,
            expected_type,
        } => AppError::invalid_field(
            key.as_str(),
            format!("`{}` is not a valid {}", value, expected_type),
        ),
        ErrorKind::InvalidUtf8InPathParam { key } => {
            AppError::invalid_field(key.as_str(), "Path parameter is not valid UTF-8")
        }
        _ => AppError::from_rejection(err.status(), err.body_text()),
    }
}
