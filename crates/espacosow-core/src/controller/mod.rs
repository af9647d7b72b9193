//! List Controllers
//!
//! One controller per feature area, all sharing the same create / update /
//! remove shape. Feature-specific operations live in extension traits.

mod list;
mod ordering;
mod clients;
mod consumable_log;
mod inventory;
mod console;

#[cfg(test)]
mod tests;

pub use list::{ListController, Placement, Record};
pub use ordering::{renormalize_order, Direction, QueueOperations};
pub use clients::ClientOperations;
pub use inventory::{InventoryOperations, StockAdjustment};
pub use console::Console;

use crate::domain::{Client, ConsumableLogEntry, InventoryItem, QueueEntry};

pub type ClientList<S> = ListController<Client, S>;
pub type ConsumableLog<S> = ListController<ConsumableLogEntry, S>;
pub type Queue<S> = ListController<QueueEntry, S>;
pub type Inventory<S> = ListController<InventoryItem, S>;
