//! Person registry backed by a fixed, read-only id set.

use async_trait::async_trait;

use common::AppResult;
use domain::KNOWN_PERSON_IDS;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Registry trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PersonRegistry: Send + Sync {
    /// Check whether a person with this id exists
    async fn exists(&self, id: i64) -> AppResult<bool>;
}

/// Registry over a static id list; there is no storage behind it.
#[derive(Debug, Clone)]
pub struct StaticPersonRegistry {
    ids: &'static [i64],
}

impl StaticPersonRegistry {
    /// Registry over the built-in known ids
    pub fn new() -> Self {
        Self::with_ids(KNOWN_PERSON_IDS)
    }

    /// Registry over a custom id list
    pub fn with_ids(ids: &'static [i64]) -> Self {
        Self { ids }
    }
}

impl Default for StaticPersonRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersonRegistry for StaticPersonRegistry {
    async fn exists(&self, id: i64) -> AppResult<bool> {
        Ok(self.ids.contains(&id))
    }
}
