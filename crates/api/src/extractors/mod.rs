//! Extractors that deserialize a request part and validate it before the
//! handler runs.
//!
//! Input that cannot be read at all (broken JSON, wrong content type,
//! oversized body) is rejected with the framework's status. Input that
//! reads but does not fit the schema, such as a missing field or a value of
//! the wrong type, becomes `422 VALIDATION_ERROR` with the field path, the
//! same as a constraint violation.

mod validated_form;
mod validated_json;
mod validated_path;
mod validated_query;

pub use validated_form::ValidatedForm;
pub use validated_json::ValidatedJson;
pub use validated_path::ValidatedPath;
pub use validated_query::ValidatedQuery;

use std::fmt::Display;

use serde::de::DeserializeOwned;

use common::AppError;

/// Reason reported for a required field that was not sent
const MISSING_FIELD_REASON: &str = "Field required";

/// Deserialize `application/x-www-form-urlencoded` pairs, keeping track of
/// the key that failed.
fn from_urlencoded<T: DeserializeOwned>(input: &[u8], location: &str) -> Result<T, AppError> {
    let deserializer = serde_urlencoded::Deserializer::new(form_urlencoded::parse(input));
    serde_path_to_error::deserialize(deserializer).map_err(|e| schema_error(e, location))
}

/// Turn a deserialization failure into a field-level error.
///
/// `location` names the request part and is used when the failure is not
/// tied to any field.
fn schema_error<E: Display>(error: serde_path_to_error::Error<E>, location: &str) -> AppError {
    let path = error.path().to_string();
    let parent = (path != ".").then_some(path);
    let message = error.inner().to_string();

    // serde reports a missing field against the struct that lacks it
    match (missing_field(&message), parent) {
        (Some(field), Some(parent)) => {
            AppError::invalid_field(format!("{}.{}", parent, field), MISSING_FIELD_REASON)
        }
        (Some(field), None) => AppError::invalid_field(field, MISSING_FIELD_REASON),
        (None, Some(path)) => AppError::invalid_field(path, message),
        (None, None) => AppError::invalid_field(location, message),
    }
}

fn missing_field(message: &str) -> Option<&str> {
    message.strip_prefix("missing field `")?.split('`').next()
}
