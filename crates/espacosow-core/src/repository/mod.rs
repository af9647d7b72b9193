//! Repository Layer
//!
//! Key-value storage abstractions and the persistent list binding.

mod traits;
mod memory_store;
mod file_store;
mod persistent_list;

pub use traits::KeyValueStore;
pub use memory_store::MemoryStore;
pub use file_store::FileStore;
pub use persistent_list::PersistentList;
