//! Espaço Sow Core
//!
//! Layered architecture:
//! - domain: record schemas, form validation and patches
//! - repository: key-value storage and the persistent list binding
//! - controller: per-feature list operations
//! - views: display orderings derived from stored lists

pub mod clock;
pub mod config;
pub mod controller;
pub mod domain;
pub mod repository;
pub mod views;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{FeatureArea, StorageConfig};
pub use controller::{
    ClientList, ClientOperations, Console, ConsumableLog, Direction, Inventory, InventoryOperations,
    ListController, Queue, QueueOperations, Record, StockAdjustment,
};
pub use domain::{DomainError, DomainResult, Entity};
pub use repository::{FileStore, KeyValueStore, MemoryStore, PersistentList};
