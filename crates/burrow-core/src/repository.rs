use crate::error::Result;
use crate::extension::Extension;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored URL record in the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// The original URL that was shortened.
    pub long_url: String,
    /// Number of successful resolutions since the record was created.
    pub access_count: u64,
    /// When the record was created.
    pub created_at: Timestamp,
}

impl UrlRecord {
    /// Creates a fresh record with a zero access count, stamped with the current time.
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            access_count: 0,
            created_at: Timestamp::now(),
        }
    }
}

/// A read-only view of a repository.
///
/// Reads never change the access count.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the URL record for a given extension.
    /// Returns `None` if the extension does not exist.
    async fn get(&self, extension: &Extension) -> Result<Option<UrlRecord>>;
}

/// Full access to the mapping.
///
/// Every method must be atomic with respect to concurrent calls on the same
/// extension: `insert` checks and inserts in one step, and `hit` reads and
/// increments in one step.
#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts a new URL record. Returns `Err(Conflict)` if the extension already exists.
    async fn insert(&self, extension: &Extension, record: UrlRecord) -> Result<()>;

    /// Increments the access count of the record and returns its long URL.
    /// Returns `None` if the extension does not exist.
    async fn hit(&self, extension: &Extension) -> Result<Option<String>>;

    /// Deletes the URL record for a given extension.
    /// Returns `true` if the record existed and was removed.
    async fn delete(&self, extension: &Extension) -> Result<bool>;
}
