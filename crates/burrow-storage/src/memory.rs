use async_trait::async_trait;
use burrow_core::error::{Result, StorageError};
use burrow_core::{Extension, ReadRepository, Repository, UrlRecord};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::trace;

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap shards the map behind per-shard locks. Every operation touches a
/// single key through one shard guard, which makes check-and-insert and
/// read-and-increment atomic while operations on other shards proceed in
/// parallel.
///
/// State lives only as long as the repository; nothing is persisted.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    storage: DashMap<Extension, UrlRecord>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, extension: &Extension) -> Result<Option<UrlRecord>> {
        Ok(self.storage.get(extension).map(|record| record.clone()))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, extension: &Extension, record: UrlRecord) -> Result<()> {
        // The entry guard holds the shard's write lock across the check and the insert.
        match self.storage.entry(extension.clone()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(extension.to_string())),
            Entry::Vacant(slot) => {
                trace!(extension = %extension, "inserting record");
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn hit(&self, extension: &Extension) -> Result<Option<String>> {
        let Some(mut record) = self.storage.get_mut(extension) else {
            return Ok(None);
        };

        record.access_count += 1;
        trace!(extension = %extension, access_count = record.access_count, "counted access");
        Ok(Some(record.long_url.clone()))
    }

    async fn delete(&self, extension: &Extension) -> Result<bool> {
        Ok(self.storage.remove(extension).is_some())
    }
}
