//! Login form and response.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateLength, ValidationError, ValidationErrors};

use crate::constants::{LOGIN_SUCCESS_MESSAGE, MAX_USERNAME_LENGTH};
use crate::password::{validate_password, Password};

/// Credentials submitted through the login form
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: Password,
}

// Written by hand: the derive attaches every checked value as an error
// param, which would need `Password: Serialize`.
impl Validate for LoginForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !self
            .username
            .validate_length(Some(1), Some(MAX_USERNAME_LENGTH), None)
        {
            let mut error = ValidationError::new("length");
            error.add_param(Cow::from("min"), &1u64);
            error.add_param(Cow::from("max"), &MAX_USERNAME_LENGTH);
            error.add_param(Cow::from("value"), &self.username);
            error.message = Some(Cow::from(format!(
                "Username must be between 1 and {} characters",
                MAX_USERNAME_LENGTH
            )));
            errors.add("username", error);
        }

        if let Err(error) = validate_password(&self.password) {
            errors.add("password", error);
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Login response, echoing the username only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginOut {
    pub username: String,
    pub message: String,
}

impl LoginOut {
    /// Build the success response for a username.
    pub fn success(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
        }
    }
}

impl From<LoginForm> for LoginOut {
    fn from(form: LoginForm) -> Self {
        Self::success(form.username)
    }
}
