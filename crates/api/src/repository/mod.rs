//! Repository layer for person lookups.

mod person_registry;

#[cfg(any(test, feature = "test-utils"))]
pub use person_registry::MockPersonRegistry;
pub use person_registry::{PersonRegistry, StaticPersonRegistry};
