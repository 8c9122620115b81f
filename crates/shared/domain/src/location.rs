//! Location schema.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::MAX_PLACE_LENGTH;

/// Where a person lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(length(min = 1, max = MAX_PLACE_LENGTH, message = "City must be between 1 and 50 characters"))]
    pub city: String,
    #[validate(length(min = 1, max = MAX_PLACE_LENGTH, message = "State must be between 1 and 50 characters"))]
    pub state: String,
    #[validate(length(min = 1, max = MAX_PLACE_LENGTH, message = "Country must be between 1 and 50 characters"))]
    pub country: String,
}
