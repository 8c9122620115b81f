//! Contact form schema.

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_CONTACT_NAME_LENGTH, MIN_CONTACT_MESSAGE_LENGTH};

/// Message submitted through the contact form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1, max = MAX_CONTACT_NAME_LENGTH, message = "First name must be between 1 and 20 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = MAX_CONTACT_NAME_LENGTH, message = "Last name must be between 1 and 20 characters"))]
    pub last_name: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = MIN_CONTACT_MESSAGE_LENGTH, message = "Message must be at least 20 characters"))]
    pub message: String,
}
