//! Domain layer - Validation schemas for the person API.
//!
//! This crate contains pure domain types with no HTTP dependencies.
//! Every schema here is created per request and discarded after the
//! response is produced; nothing is persisted.

pub mod constants;
pub mod contact;
pub mod error;
pub mod location;
pub mod password;
pub mod person;
pub mod login;
pub mod upload;

pub use constants::*;
pub use contact::ContactMessage;
pub use error::{DomainError, DomainResult};
pub use location::Location;
pub use password::{validate_password, Password};
pub use person::{HairColor, Person, PersonBase, PersonOut};
pub use login::{LoginForm, LoginOut};
pub use upload::ImageUpload;
