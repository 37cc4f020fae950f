//! Durable key-value storage for the cart snapshot.

mod file;
mod memory;
mod repository;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::{CartRepository, DEFAULT_CART_KEY};

use crate::error::StorageError;

/// A persistent string store keyed by name, in the manner of browser local
/// storage. Writes replace the whole value.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
