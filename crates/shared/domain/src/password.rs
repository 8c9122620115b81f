//! Password value object.
//!
//! Passwords arrive in request bodies and forms but are never stored,
//! hashed or returned. The wrapper deserializes transparently, has no
//! `Serialize` impl, and redacts itself from debug output so it cannot
//! leak through responses or logs.

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;
use validator::{ValidateLength, ValidationError};

use crate::constants::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Plain text password received from a client.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

// Don't expose the plain text in debug output
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

impl Password {
    /// Wrap a plain text password.
    pub fn new(plain_text: impl Into<String>) -> Self {
        Self(plain_text.into())
    }

    /// Borrow the plain text.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

/// Check the password length bounds (counted in characters).
///
/// Called from the hand-written `Validate` impls of schemas that carry a
/// [`Password`].
pub fn validate_password(password: &Password) -> Result<(), ValidationError> {
    let plain_text = password.expose();
    if plain_text.validate_length(Some(MIN_PASSWORD_LENGTH), Some(MAX_PASSWORD_LENGTH), None) {
        return Ok(());
    }

    // The plain text is never attached as a param
    let mut error = ValidationError::new("length");
    error.add_param(Cow::from("min"), &MIN_PASSWORD_LENGTH);
    error.add_param(Cow::from("max"), &MAX_PASSWORD_LENGTH);
    error.message = Some(Cow::from(format!(
        "Password must be between {} and {} characters",
        MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
    )));
    Err(error)
}
