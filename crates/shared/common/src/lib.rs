//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified HTTP error handling
//! - Field-level reporting of validation failures
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, FieldError};
