//! Domain-level constants.
//!
//! These constants define the validation bounds and fixed data the API
//! works against. Length bounds are `u64` because that is what
//! `validator` measures lengths in.

// =============================================================================
// Person
// =============================================================================

/// Ids the registry reports as existing
pub const KNOWN_PERSON_IDS: &[i64] = &[1, 2, 3, 4, 5];

/// Maximum length for first and last names
pub const MAX_NAME_LENGTH: u64 = 50;

/// Smallest accepted age
pub const MIN_AGE: i32 = 1;

/// Largest accepted age
pub const MAX_AGE: i32 = 115;

/// Message returned when a looked up person exists
pub const PERSON_EXISTS_MESSAGE: &str = "It exists!";

// =============================================================================
// Location
// =============================================================================

/// Maximum length for city, state and country
pub const MAX_PLACE_LENGTH: u64 = 50;

// =============================================================================
// Credentials
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 64;

/// Maximum username length for the login form
pub const MAX_USERNAME_LENGTH: u64 = 20;

/// Message echoed back on login
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";

// =============================================================================
// Contact
// =============================================================================

/// Maximum length for contact form names
pub const MAX_CONTACT_NAME_LENGTH: u64 = 20;

/// Minimum length of a contact message body
pub const MIN_CONTACT_MESSAGE_LENGTH: u64 = 20;

// =============================================================================
// Uploads
// =============================================================================

/// Bytes per kilobyte used when reporting upload sizes
pub const BYTES_PER_KB: f64 = 1024.0;
