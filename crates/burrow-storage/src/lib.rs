pub mod memory;

pub use burrow_core::{ReadRepository, Repository, StorageError, UrlRecord};
pub use memory::InMemoryRepository;
