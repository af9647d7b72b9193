//! Domain Layer
//!
//! Contains all record schemas and core abstractions.
//! This layer has NO storage dependencies (only serde/chrono for the
//! persisted shape).

mod entity;
mod client;
mod consumable;
mod queue_entry;
mod inventory_item;

pub use entity::{date_or_today, optional, parse_count, require, DomainError, DomainResult, Entity};
pub use client::{Client, ClientForm, ClientPatch};
pub use consumable::{ConsumableForm, ConsumableLogEntry, ConsumablePatch};
pub use queue_entry::{QueueEntry, QueueForm, QueuePatch};
pub use inventory_item::{InventoryForm, InventoryItem, InventoryPatch};
